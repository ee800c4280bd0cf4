//! Shared library for the cropdoc disease guide.
//!
//! The crate owns the plant disease catalog: typed disease and remedy records,
//! strict loading (JSON Schema plus catalog invariants), and the search,
//! lookup and count operations the guide screen renders. Presentation is
//! somebody else's job; everything here is in-memory and read-only once a
//! catalog is loaded.
//!
//! ```ignore
//! let engine = CatalogQueryEngine::bundled()?;
//! let query = QueryParams::parse("potato", "fungal", "all")?;
//! for disease in engine.search(&query) {
//!     println!("{}", disease.name);
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod query;
pub mod schema_loader;

pub use catalog::{
    CatalogDocument, CatalogHandle, CatalogQueryEngine, ConfidenceLevel, CostLevel,
    DiseaseCategory, DiseaseId, DiseaseRecord, RemedyId, RemedyRecord, RemedyType, Severity,
    load_catalog_from_path,
};
pub use config::{CatalogSource, init_logging, resolve_catalog_source};
pub use error::CatalogError;
pub use query::{QueryParams, RemedyFilter, Selector};
pub use schema_loader::CATALOG_SCHEMA_VERSION;
