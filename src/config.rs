//! Runtime configuration shared by the helper binaries.
//!
//! Catalog selection order: an explicit `--catalog` flag, then the
//! `CROPDOC_CATALOG` environment variable, then the catalog compiled into the
//! crate. Log filtering comes from `CROPDOC_LOG` using `tracing` directive
//! syntax (e.g. `cropdoc=debug`).

use crate::catalog::CatalogQueryEngine;
use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub const CATALOG_ENV: &str = "CROPDOC_CATALOG";
pub const LOG_ENV: &str = "CROPDOC_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    Bundled,
    File(PathBuf),
}

impl CatalogSource {
    pub fn open(&self) -> Result<CatalogQueryEngine> {
        match self {
            CatalogSource::Bundled => {
                CatalogQueryEngine::bundled().context("loading bundled catalog")
            }
            CatalogSource::File(path) => CatalogQueryEngine::from_path(path)
                .with_context(|| format!("loading catalog {}", path.display())),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Bundled => f.write_str("<bundled>"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Decide which catalog to load. Blank values are treated as unset.
pub fn resolve_catalog_source(flag: Option<PathBuf>) -> CatalogSource {
    resolve_with_env(flag, env::var_os(CATALOG_ENV).map(PathBuf::from))
}

fn resolve_with_env(flag: Option<PathBuf>, env_value: Option<PathBuf>) -> CatalogSource {
    flag.into_iter()
        .chain(env_value)
        .find(|path| !path.as_os_str().is_empty())
        .map(CatalogSource::File)
        .unwrap_or(CatalogSource::Bundled)
}

/// Install a stderr `tracing` subscriber filtered by `CROPDOC_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
