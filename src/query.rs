//! Query parameters for catalog searches.
//!
//! A query is plain data owned by the caller and passed to
//! `CatalogQueryEngine::search` on every call; the engine keeps no query
//! state of its own. Tokens coming from UI controls go through
//! `QueryParams::parse`, which rejects anything outside the fixed
//! enumerations instead of quietly widening the filter to "all".

use crate::catalog::identity::{DiseaseCategory, RemedyType, Severity};
use crate::catalog::model::{DiseaseRecord, RemedyRecord};
use crate::error::CatalogError;
use std::str::FromStr;

const ALL_TOKEN: &str = "all";

/// Either "all" or a single enumeration value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(expected) => expected == value,
        }
    }
}

impl<T> Selector<T>
where
    T: FromStr<Err = CatalogError>,
{
    /// Parse a UI token. Only `all` (any case) selects everything; a blank
    /// token is rejected like any other unknown value.
    pub fn parse(token: &str) -> Result<Self, CatalogError> {
        let token = token.trim();
        if token.eq_ignore_ascii_case(ALL_TOKEN) {
            return Ok(Selector::All);
        }
        token.parse().map(Selector::Only)
    }
}

impl<T> From<T> for Selector<T> {
    fn from(value: T) -> Self {
        Selector::Only(value)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
/// Search text plus filters, all combined with logical AND.
///
/// The default value matches every record.
pub struct QueryParams {
    /// Case-insensitive substring matched against name, description and
    /// affected crops. Ignored when blank.
    pub text: String,
    pub category: Selector<DiseaseCategory>,
    pub severity: Selector<Severity>,
    /// Exact (case-insensitive) affected crop.
    pub crop: Option<String>,
    /// Keep diseases with at least one remedy of this type.
    pub remedy_type: Option<RemedyType>,
    /// Keep diseases with at least one organic remedy.
    pub organic_only: bool,
    /// Keep premium diseases only.
    pub premium_only: bool,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from the raw values of the search box and the category
    /// and severity chips.
    pub fn parse(text: &str, category: &str, severity: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            text: text.to_string(),
            category: Selector::parse(category)?,
            severity: Selector::parse(severity)?,
            ..Self::default()
        })
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<Selector<DiseaseCategory>>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_severity(mut self, severity: impl Into<Selector<Severity>>) -> Self {
        self.severity = severity.into();
        self
    }

    pub fn with_crop(mut self, crop: impl Into<String>) -> Self {
        self.crop = Some(crop.into());
        self
    }

    pub fn with_remedy_type(mut self, remedy_type: RemedyType) -> Self {
        self.remedy_type = Some(remedy_type);
        self
    }

    pub fn organic_only(mut self) -> Self {
        self.organic_only = true;
        self
    }

    pub fn premium_only(mut self) -> Self {
        self.premium_only = true;
        self
    }

    /// Whether `record` satisfies every active predicate.
    pub fn matches(&self, record: &DiseaseRecord) -> bool {
        self.matcher().matches(record)
    }

    pub(crate) fn matcher(&self) -> Matcher<'_> {
        let needle = self.text.trim().to_lowercase();
        let crop = self
            .crop
            .as_deref()
            .map(str::trim)
            .filter(|crop| !crop.is_empty())
            .map(str::to_lowercase);
        Matcher {
            query: self,
            needle,
            crop,
        }
    }
}

/// A query with its text lowered once per search instead of once per record.
pub(crate) struct Matcher<'a> {
    query: &'a QueryParams,
    needle: String,
    crop: Option<String>,
}

impl Matcher<'_> {
    pub(crate) fn matches(&self, record: &DiseaseRecord) -> bool {
        self.text_matches(record)
            && self.query.category.admits(&record.category)
            && self.query.severity.admits(&record.severity)
            && self.crop_matches(record)
            && self.remedies_match(record)
            && (!self.query.premium_only || record.is_premium)
    }

    fn text_matches(&self, record: &DiseaseRecord) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        contains_folded(&record.name, &self.needle)
            || contains_folded(&record.description, &self.needle)
            || record
                .affected_crops
                .iter()
                .any(|crop| contains_folded(crop, &self.needle))
    }

    fn crop_matches(&self, record: &DiseaseRecord) -> bool {
        match &self.crop {
            None => true,
            Some(wanted) => record
                .affected_crops
                .iter()
                .any(|crop| crop.trim().to_lowercase() == *wanted),
        }
    }

    fn remedies_match(&self, record: &DiseaseRecord) -> bool {
        if let Some(remedy_type) = self.query.remedy_type {
            if !record.remedies.iter().any(|r| r.remedy_type == remedy_type) {
                return false;
            }
        }
        !self.query.organic_only || record.remedies.iter().any(|r| r.is_organic)
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[derive(Clone, Debug, PartialEq)]
/// Narrows the remedies listed for one disease.
pub struct RemedyFilter {
    pub remedy_type: Option<RemedyType>,
    pub organic_only: bool,
    /// When false, premium remedies are left out.
    pub include_premium: bool,
}

impl Default for RemedyFilter {
    fn default() -> Self {
        Self {
            remedy_type: None,
            organic_only: false,
            include_premium: true,
        }
    }
}

impl RemedyFilter {
    pub fn matches(&self, remedy: &RemedyRecord) -> bool {
        self.remedy_type.is_none_or(|t| remedy.remedy_type == t)
            && (!self.organic_only || remedy.is_organic)
            && (self.include_premium || !remedy.is_premium)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blight() -> DiseaseRecord {
        let mut record = DiseaseRecord::new(
            "tomato-blight",
            "Tomato Late Blight",
            DiseaseCategory::Fungal,
            Severity::High,
            "A serious fungal disease that affects tomato and potato plants.",
        );
        record.affected_crops = vec!["Tomato".to_string(), "Potato".to_string()];
        record
    }

    #[test]
    fn default_query_matches_everything() {
        assert!(QueryParams::default().matches(&blight()));
        assert!(QueryParams::new().with_text("   ").matches(&blight()));
    }

    #[test]
    fn text_matches_name_description_or_crop() {
        let record = blight();
        assert!(QueryParams::new().with_text("LATE").matches(&record));
        assert!(QueryParams::new().with_text("serious").matches(&record));
        assert!(QueryParams::new().with_text("potato").matches(&record));
        assert!(QueryParams::new().with_text("  tato ").matches(&record));
        assert!(!QueryParams::new().with_text("wilt").matches(&record));
    }

    #[test]
    fn text_does_not_search_symptoms() {
        let mut record = blight();
        record.symptoms = vec!["Brown patches".to_string()];
        assert!(!QueryParams::new().with_text("patches").matches(&record));
    }

    #[test]
    fn category_and_severity_combine_with_and() {
        let record = blight();
        let fungal_high = QueryParams::new()
            .with_category(DiseaseCategory::Fungal)
            .with_severity(Severity::High);
        assert!(fungal_high.matches(&record));
        let fungal_low = fungal_high.clone().with_severity(Severity::Low);
        assert!(!fungal_low.matches(&record));
        let bacterial = QueryParams::new().with_category(DiseaseCategory::Bacterial);
        assert!(!bacterial.matches(&record));
    }

    #[test]
    fn parse_accepts_all_tokens_in_any_case() {
        let query = QueryParams::parse("tomato", "ALL", " all ").unwrap();
        assert_eq!(query.category, Selector::All);
        assert_eq!(query.severity, Selector::All);

        let query = QueryParams::parse("", " Fungal", "critical").unwrap();
        assert_eq!(query.category, Selector::Only(DiseaseCategory::Fungal));
        assert_eq!(query.severity, Selector::Only(Severity::Critical));
    }

    #[test]
    fn parse_rejects_blank_tokens() {
        for token in ["", "   ", "\t"] {
            let err = Selector::<Severity>::parse(token).unwrap_err();
            assert!(matches!(
                err,
                CatalogError::InvalidQuery { ref field, .. } if field == "severity"
            ));
        }
        assert!(QueryParams::parse("", "", "all").is_err());
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        let err = QueryParams::parse("", "fungus", "all").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidQuery { ref field, .. } if field == "category"
        ));
        let err = QueryParams::parse("", "all", "extreme").unwrap_err();
        assert_eq!(err.to_string(), "invalid severity 'extreme'");
    }

    #[test]
    fn crop_filter_is_exact_not_substring() {
        let record = blight();
        assert!(QueryParams::new().with_crop("tomato").matches(&record));
        assert!(!QueryParams::new().with_crop("tom").matches(&record));
        assert!(QueryParams::new().with_crop(" ").matches(&record));
    }

    #[test]
    fn premium_only_checks_the_disease_flag() {
        let mut record = blight();
        assert!(!QueryParams::new().premium_only().matches(&record));
        record.is_premium = true;
        assert!(QueryParams::new().premium_only().matches(&record));
    }
}
