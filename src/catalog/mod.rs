//! Disease catalog wiring.
//!
//! Types here mirror the JSON catalog under `schema/diseases.json`; callers
//! use `CatalogQueryEngine` for validated lookups and searches, and
//! `CatalogHandle` when the catalog may be swapped at runtime.

pub mod identity;
pub mod index;
pub mod model;
pub mod repository;

pub use identity::{
    ConfidenceLevel, CostLevel, DiseaseCategory, DiseaseId, RemedyId, RemedyType, Severity,
};
pub use index::CatalogQueryEngine;
pub use model::{CatalogDocument, DiseaseRecord, RemedyRecord, load_catalog_from_path};
pub use repository::CatalogHandle;
