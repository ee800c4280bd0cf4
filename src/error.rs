//! Typed failures reported by the catalog and its queries.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog data broke an invariant; every problem found is listed.
    #[error("catalog failed validation:\n{}", .0.join("\n"))]
    Validation(Vec<String>),

    /// A query token was not `all` or a member of the named enumeration.
    #[error("invalid {field} '{value}'")]
    InvalidQuery { field: String, value: String },

    #[error("no disease with id '{0}'")]
    NotFound(String),

    #[error("reading catalog {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    pub(crate) fn invalid_query(field: &str, value: &str) -> Self {
        CatalogError::InvalidQuery {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        CatalogError::Validation(vec![message.into()])
    }

    /// Problems carried by a `Validation` error; empty for other kinds.
    pub fn problems(&self) -> &[String] {
        match self {
            CatalogError::Validation(problems) => problems,
            _ => &[],
        }
    }
}
