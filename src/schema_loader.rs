//! JSON Schema gate for catalog documents.
//!
//! The schema ships inside the binary so a catalog file can be checked without
//! a repository checkout. Validation reports every violation with its JSON
//! pointer rather than stopping at the first one.

use crate::error::CatalogError;
use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

/// The only catalog document version this crate understands.
pub const CATALOG_SCHEMA_VERSION: &str = "disease_catalog_v1";

const CATALOG_SCHEMA: &str = include_str!("../schema/disease_catalog.schema.json");

/// Compiled catalog schema.
pub(crate) struct CatalogSchema {
    compiled: JSONSchema,
}

impl CatalogSchema {
    pub(crate) fn bundled() -> Result<Self, CatalogError> {
        let raw: Value = serde_json::from_str(CATALOG_SCHEMA)
            .map_err(|err| CatalogError::validation(format!("parsing bundled schema: {err}")))?;
        let compiled = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&raw)
            .map_err(|err| CatalogError::validation(format!("compiling bundled schema: {err}")))?;
        Ok(Self { compiled })
    }

    /// Check the version marker first so a stale file gets one clear message
    /// instead of a cascade of structural errors.
    pub(crate) fn validate(&self, document: &Value) -> Result<(), CatalogError> {
        validate_schema_version(document)?;

        if let Err(errors) = self.compiled.validate(document) {
            let details = errors
                .map(|err| {
                    let pointer = err.instance_path.to_string();
                    if pointer.is_empty() {
                        err.to_string()
                    } else {
                        format!("{pointer}: {err}")
                    }
                })
                .collect::<Vec<_>>();
            return Err(CatalogError::Validation(details));
        }
        Ok(())
    }
}

fn validate_schema_version(document: &Value) -> Result<(), CatalogError> {
    match document.get("schema_version").and_then(Value::as_str) {
        Some(CATALOG_SCHEMA_VERSION) => Ok(()),
        Some(other) => Err(CatalogError::validation(format!(
            "schema_version '{other}' is not supported (expected {CATALOG_SCHEMA_VERSION})"
        ))),
        None => Err(CatalogError::validation(
            "catalog is missing a string schema_version",
        )),
    }
}
