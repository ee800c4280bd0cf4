//! Validated, immutable view of a disease catalog.
//!
//! `CatalogQueryEngine` owns its records outright and never mutates them
//! after `load`, so a single instance can serve any number of concurrent
//! readers. Loading is strict: duplicate ids, blank names and out-of-range
//! effectiveness values are all collected and reported together, and no
//! engine is constructed unless the whole catalog is clean.

use crate::catalog::identity::{DiseaseCategory, DiseaseId, Severity};
use crate::catalog::model::{CatalogDocument, DiseaseRecord, RemedyRecord};
use crate::error::CatalogError;
use crate::query::{QueryParams, RemedyFilter};
use crate::schema_loader::CatalogSchema;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

const BUNDLED_CATALOG: &str = include_str!("../../schema/diseases.json");

#[derive(Clone, Debug)]
/// Disease records in catalog order plus an index keyed by disease id.
pub struct CatalogQueryEngine {
    records: Vec<DiseaseRecord>,
    by_id: BTreeMap<String, usize>,
}

impl CatalogQueryEngine {
    /// Validate `records` and take ownership of them.
    pub fn load(records: impl IntoIterator<Item = DiseaseRecord>) -> Result<Self, CatalogError> {
        let records: Vec<DiseaseRecord> = records.into_iter().collect();
        let by_id = build_index(&records)?;
        debug!(diseases = records.len(), "catalog loaded");
        Ok(Self { records, by_id })
    }

    /// Parse a catalog document, check it against the bundled JSON Schema and
    /// then apply the same invariants as `load`.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|err| CatalogError::validation(format!("parsing catalog: {err}")))?;
        CatalogSchema::bundled()?.validate(&value)?;
        let document: CatalogDocument = serde_json::from_value(value)
            .map_err(|err| CatalogError::validation(format!("decoding catalog: {err}")))?;
        Self::load(document.diseases)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "reading catalog file");
        Self::from_json_str(&raw)
    }

    /// The catalog compiled into the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    /// Records matching every active predicate of `query`, in catalog order.
    pub fn search(&self, query: &QueryParams) -> Vec<&DiseaseRecord> {
        let matcher = query.matcher();
        let results: Vec<&DiseaseRecord> = self
            .records
            .iter()
            .filter(|record| matcher.matches(record))
            .collect();
        trace!(matched = results.len(), total = self.records.len(), "search");
        results
    }

    /// Resolve a disease by id, or `NotFound`.
    pub fn by_id(&self, id: &str) -> Result<&DiseaseRecord, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Resolve a disease by id without treating absence as an error.
    pub fn get(&self, id: &str) -> Option<&DiseaseRecord> {
        self.by_id.get(id).map(|&idx| &self.records[idx])
    }

    /// Remedies of one disease that pass `filter`, in catalog order.
    pub fn remedies(
        &self,
        disease_id: &str,
        filter: &RemedyFilter,
    ) -> Result<Vec<&RemedyRecord>, CatalogError> {
        let disease = self.by_id(disease_id)?;
        Ok(disease
            .remedies
            .iter()
            .filter(|remedy| filter.matches(remedy))
            .collect())
    }

    /// Per-category record counts. Every category is present, so the values
    /// always sum to `len()`.
    pub fn count_by_category(&self) -> BTreeMap<DiseaseCategory, usize> {
        let mut counts: BTreeMap<DiseaseCategory, usize> =
            DiseaseCategory::ALL.into_iter().map(|c| (c, 0)).collect();
        for record in &self.records {
            *counts.entry(record.category).or_default() += 1;
        }
        counts
    }

    pub fn count_by_severity(&self) -> BTreeMap<Severity, usize> {
        let mut counts: BTreeMap<Severity, usize> =
            Severity::ALL.into_iter().map(|s| (s, 0)).collect();
        for record in &self.records {
            *counts.entry(record.severity).or_default() += 1;
        }
        counts
    }

    pub fn records(&self) -> &[DiseaseRecord] {
        &self.records
    }

    /// Disease ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &DiseaseId> {
        self.records.iter().map(|record| &record.id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn build_index(records: &[DiseaseRecord]) -> Result<BTreeMap<String, usize>, CatalogError> {
    let mut problems = Vec::new();
    let mut map = BTreeMap::new();

    for (idx, record) in records.iter().enumerate() {
        let id = record.id.as_str();
        let label = if id.trim().is_empty() {
            problems.push(format!("disease #{idx} has no id"));
            format!("#{idx}")
        } else {
            if map.insert(id.to_string(), idx).is_some() {
                problems.push(format!("duplicate disease id {id}"));
            }
            id.to_string()
        };
        if record.name.trim().is_empty() {
            problems.push(format!("disease {label} has an empty name"));
        }
        check_remedies(&label, record, &mut problems);
    }

    if problems.is_empty() {
        Ok(map)
    } else {
        Err(CatalogError::Validation(problems))
    }
}

fn check_remedies(disease: &str, record: &DiseaseRecord, problems: &mut Vec<String>) {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for (pos, remedy) in record.remedies.iter().enumerate() {
        let id = remedy.id.as_str();
        let label = if id.trim().is_empty() {
            problems.push(format!("disease {disease} has a remedy with no id"));
            format!("#{pos}")
        } else {
            if !seen.insert(id) {
                problems.push(format!("disease {disease} repeats remedy id {id}"));
            }
            id.to_string()
        };
        if remedy.effectiveness > 100 {
            problems.push(format!(
                "remedy {label} of {disease} has effectiveness {} outside 0-100",
                remedy.effectiveness
            ));
        }
    }
}
