//! Validate disease catalog files.
//!
//! Each path is checked against the bundled JSON Schema and the catalog
//! invariants. Every file is reported, not just the first failure; the exit
//! status is 1 when any file is rejected. With no arguments the bundled
//! catalog is checked.

use anyhow::{Result, bail};
use cropdoc::{CatalogSource, init_logging};
use std::env;
use std::path::PathBuf;
use tracing::info;

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut sources = Vec::new();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                println!("Usage: catalog-lint [PATH...]");
                return Ok(());
            }
            flag if flag.starts_with("--") => bail!("unknown flag: {flag}"),
            path => sources.push(CatalogSource::File(PathBuf::from(path))),
        }
    }
    if sources.is_empty() {
        sources.push(CatalogSource::Bundled);
    }

    let mut failed = 0usize;
    for source in &sources {
        match source.open() {
            Ok(engine) => println!("ok {source} ({} diseases)", engine.len()),
            Err(err) => {
                failed += 1;
                println!("FAIL {source}\n{err:#}");
            }
        }
    }

    info!(checked = sources.len(), failed, "lint finished");
    if failed > 0 {
        bail!("{failed} of {} catalog(s) failed validation", sources.len());
    }
    Ok(())
}
