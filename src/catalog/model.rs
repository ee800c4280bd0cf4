//! Deserializable representation of a disease catalog document.
//!
//! The types mirror `schema/disease_catalog.schema.json`, including its
//! camelCase field names. Use `CatalogQueryEngine` for validation, lookup and
//! filtering; use these structs directly when the raw document is needed.

use crate::catalog::identity::{
    CostLevel, DiseaseCategory, DiseaseId, RemedyId, RemedyType, Severity,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Catalog file as stored on disk.
pub struct CatalogDocument {
    pub schema_version: String,
    pub diseases: Vec<DiseaseRecord>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One disease entry together with the remedies that treat it.
pub struct DiseaseRecord {
    pub id: DiseaseId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    pub category: DiseaseCategory,
    pub description: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub causes: Vec<String>,
    #[serde(default)]
    pub remedies: Vec<RemedyRecord>,
    #[serde(default)]
    pub preventive_measures: Vec<String>,
    pub severity: Severity,
    #[serde(default)]
    pub affected_crops: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Treatment for a single disease. Remedies never exist outside their disease.
pub struct RemedyRecord {
    pub id: RemedyId,
    pub title: String,
    #[serde(rename = "type")]
    pub remedy_type: RemedyType,
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    /// Free text such as "7-10 days"; never parsed.
    pub duration: String,
    /// Percentage in `0..=100`, checked when the catalog is loaded.
    pub effectiveness: u8,
    pub cost: CostLevel,
    #[serde(default)]
    pub is_organic: bool,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl DiseaseRecord {
    /// Minimal record with empty lists and no remedies.
    pub fn new(
        id: &str,
        name: &str,
        category: DiseaseCategory,
        severity: Severity,
        description: &str,
    ) -> Self {
        Self {
            id: DiseaseId::from(id),
            name: name.to_string(),
            scientific_name: None,
            category,
            description: description.to_string(),
            symptoms: Vec::new(),
            causes: Vec::new(),
            remedies: Vec::new(),
            preventive_measures: Vec::new(),
            severity,
            affected_crops: Vec::new(),
            image_url: None,
            is_premium: false,
        }
    }

    pub fn remedy(&self, id: &RemedyId) -> Option<&RemedyRecord> {
        self.remedies.iter().find(|remedy| &remedy.id == id)
    }
}

impl RemedyRecord {
    /// Star rating out of five, one star per full 20 points of effectiveness.
    pub fn effectiveness_stars(&self) -> u8 {
        self.effectiveness.min(100) / 20
    }
}

/// Read and parse a catalog document from disk without schema or invariant
/// checks.
pub fn load_catalog_from_path(path: &Path) -> Result<CatalogDocument> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    let document: CatalogDocument = serde_json::from_str(&data)
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    Ok(document)
}
