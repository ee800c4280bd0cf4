use crate::error::CatalogError;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

/// Stable identifier for a disease entry.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiseaseId(pub String);

/// Identifier for a remedy; only unique within its owning disease.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemedyId(pub String);

impl DiseaseId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DiseaseId {
    fn from(value: &str) -> Self {
        DiseaseId(value.to_string())
    }
}

impl RemedyId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RemedyId {
    fn from(value: &str) -> Self {
        RemedyId(value.to_string())
    }
}

/// Disease grouping shown as category chips in the guide.
///
/// The set is closed: catalogs and queries carrying any other value are
/// rejected rather than mapped onto a catch-all variant.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum DiseaseCategory {
    Fungal,
    Bacterial,
    Viral,
    Nutritional,
    Pest,
    Environmental,
}

/// How serious a disease is. Declaration order is the ranking order, so
/// `Low < Medium < High < Critical`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl DiseaseCategory {
    pub const ALL: [DiseaseCategory; 6] = [
        DiseaseCategory::Fungal,
        DiseaseCategory::Bacterial,
        DiseaseCategory::Viral,
        DiseaseCategory::Nutritional,
        DiseaseCategory::Pest,
        DiseaseCategory::Environmental,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiseaseCategory::Fungal => "fungal",
            DiseaseCategory::Bacterial => "bacterial",
            DiseaseCategory::Viral => "viral",
            DiseaseCategory::Nutritional => "nutritional",
            DiseaseCategory::Pest => "pest",
            DiseaseCategory::Environmental => "environmental",
        }
    }
}

impl FromStr for DiseaseCategory {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fungal" => Ok(DiseaseCategory::Fungal),
            "bacterial" => Ok(DiseaseCategory::Bacterial),
            "viral" => Ok(DiseaseCategory::Viral),
            "nutritional" => Ok(DiseaseCategory::Nutritional),
            "pest" => Ok(DiseaseCategory::Pest),
            "environmental" => Ok(DiseaseCategory::Environmental),
            _ => Err(CatalogError::invalid_query("category", value)),
        }
    }
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl FromStr for Severity {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            _ => Err(CatalogError::invalid_query("severity", value)),
        }
    }
}

impl fmt::Display for DiseaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const CATEGORY_VARIANTS: &[&str] = &[
    "fungal",
    "bacterial",
    "viral",
    "nutritional",
    "pest",
    "environmental",
];
const SEVERITY_VARIANTS: &[&str] = &["low", "medium", "high", "critical"];

// Catalog files spell values in lowercase only; the case-folding in
// `FromStr` is for query tokens typed by people.
impl Serialize for DiseaseCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DiseaseCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        DiseaseCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| de::Error::unknown_variant(&value, CATEGORY_VARIANTS))
    }
}

impl Serialize for Severity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str() == value)
            .ok_or_else(|| de::Error::unknown_variant(&value, SEVERITY_VARIANTS))
    }
}

/// Treatment approach of a remedy.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemedyType {
    Chemical,
    Organic,
    Biological,
    Preventive,
}

impl RemedyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemedyType::Chemical => "chemical",
            RemedyType::Organic => "organic",
            RemedyType::Biological => "biological",
            RemedyType::Preventive => "preventive",
        }
    }
}

impl FromStr for RemedyType {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "chemical" => Ok(RemedyType::Chemical),
            "organic" => Ok(RemedyType::Organic),
            "biological" => Ok(RemedyType::Biological),
            "preventive" => Ok(RemedyType::Preventive),
            _ => Err(CatalogError::invalid_query("remedy_type", value)),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostLevel {
    Low,
    Medium,
    High,
}

/// Bucketed detection confidence, as shown on the results screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    /// Classify a confidence percentage: 80 and above is high, 60 and above
    /// is medium, anything lower is low.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 80.0 {
            ConfidenceLevel::High
        } else if confidence >= 60.0 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_lowercase_and_rejects_unknown() {
        let json = serde_json::to_string(&DiseaseCategory::Nutritional).unwrap();
        assert_eq!(json, "\"nutritional\"");
        let back: DiseaseCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DiseaseCategory::Nutritional);

        let err = serde_json::from_str::<DiseaseCategory>("\"fungus\"").unwrap_err();
        assert!(err.to_string().contains("fungus"));
        assert!(serde_json::from_str::<DiseaseCategory>("\"Fungal\"").is_err());
    }

    #[test]
    fn severity_orders_by_rank() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::High < Severity::Critical);
        let mut shuffled = vec![Severity::Critical, Severity::Low, Severity::High, Severity::Medium];
        shuffled.sort();
        assert_eq!(shuffled, Severity::ALL.to_vec());
    }

    #[test]
    fn query_tokens_parse_case_insensitively() {
        assert_eq!("  BACTERIAL ".parse::<DiseaseCategory>().unwrap(), DiseaseCategory::Bacterial);
        assert_eq!("Critical".parse::<Severity>().unwrap(), Severity::Critical);
        assert_eq!("Organic".parse::<RemedyType>().unwrap(), RemedyType::Organic);

        let err = "severe".parse::<Severity>().unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidQuery { ref field, ref value } if field == "severity" && value == "severe"
        ));
    }

    #[test]
    fn confidence_thresholds_match_results_screen() {
        assert_eq!(ConfidenceLevel::from_confidence(89.0), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_confidence(80.0), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_confidence(79.9), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_confidence(60.0), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_confidence(12.0), ConfidenceLevel::Low);
    }

    #[test]
    fn disease_id_is_transparent() {
        let id = DiseaseId::from("tomato-blight");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"tomato-blight\"");
    }
}
