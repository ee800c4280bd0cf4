//! Query the disease catalog from the command line.
//!
//! Runs one search, lookup or count against the configured catalog and prints
//! the result as compact JSON on stdout. Filter tokens go through the same
//! parser the guide screen uses, so an unknown category or severity fails
//! instead of widening the search.

use anyhow::{Context, Result, anyhow, bail};
use cropdoc::{
    CatalogQueryEngine, QueryParams, RemedyFilter, RemedyType, init_logging,
    resolve_catalog_source,
};
use serde_json::{Value, json};
use std::env;
use std::path::PathBuf;
use tracing::debug;

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse(env::args().skip(1))?;
    let source = resolve_catalog_source(args.catalog.clone());
    debug!(%source, "opening catalog");
    let engine = source.open()?;

    let output = execute(&engine, &args)?;
    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

fn execute(engine: &CatalogQueryEngine, args: &CliArgs) -> Result<Value> {
    match &args.mode {
        Mode::Search => {
            let query = args.query()?;
            Ok(serde_json::to_value(engine.search(&query))?)
        }
        Mode::Lookup(id) => Ok(serde_json::to_value(engine.by_id(id)?)?),
        Mode::Remedies(id) => {
            let filter = RemedyFilter {
                remedy_type: args.remedy_type,
                organic_only: args.organic,
                include_premium: !args.no_premium,
            };
            Ok(serde_json::to_value(engine.remedies(id, &filter)?)?)
        }
        Mode::Counts => Ok(json!({
            "total": engine.len(),
            "categories": engine.count_by_category(),
            "severities": engine.count_by_severity(),
        })),
    }
}

#[derive(Debug, PartialEq)]
enum Mode {
    Search,
    Lookup(String),
    Remedies(String),
    Counts,
}

#[derive(Debug)]
struct CliArgs {
    catalog: Option<PathBuf>,
    mode: Mode,
    text: String,
    category: String,
    severity: String,
    crop: Option<String>,
    remedy_type: Option<RemedyType>,
    organic: bool,
    premium: bool,
    no_premium: bool,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut args = args.into_iter();
        let mut parsed = CliArgs {
            catalog: None,
            mode: Mode::Search,
            text: String::new(),
            category: "all".to_string(),
            severity: "all".to_string(),
            crop: None,
            remedy_type: None,
            organic: false,
            premium: false,
            no_premium: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => {
                    parsed.catalog = Some(PathBuf::from(next_value(&mut args, "--catalog")?))
                }
                "--text" => parsed.text = next_value(&mut args, "--text")?,
                "--category" => parsed.category = next_value(&mut args, "--category")?,
                "--severity" => parsed.severity = next_value(&mut args, "--severity")?,
                "--crop" => parsed.crop = Some(next_value(&mut args, "--crop")?),
                "--remedy-type" => {
                    let raw = next_value(&mut args, "--remedy-type")?;
                    parsed.remedy_type = Some(raw.parse()?);
                }
                "--organic" => parsed.organic = true,
                "--premium" => parsed.premium = true,
                "--no-premium" => parsed.no_premium = true,
                "--id" => parsed.set_mode(Mode::Lookup(next_value(&mut args, "--id")?))?,
                "--remedies" => {
                    parsed.set_mode(Mode::Remedies(next_value(&mut args, "--remedies")?))?
                }
                "--counts" => parsed.set_mode(Mode::Counts)?,
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}\n{}", usage()),
            }
        }

        Ok(parsed)
    }

    fn set_mode(&mut self, mode: Mode) -> Result<()> {
        if self.mode != Mode::Search {
            bail!("--id, --remedies and --counts are mutually exclusive");
        }
        self.mode = mode;
        Ok(())
    }

    fn query(&self) -> Result<QueryParams> {
        let mut query = QueryParams::parse(&self.text, &self.category, &self.severity)
            .context("invalid search filters")?;
        query.crop = self.crop.clone();
        query.remedy_type = self.remedy_type;
        query.organic_only = self.organic;
        query.premium_only = self.premium;
        Ok(query)
    }
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: guide-query [--catalog PATH] [--text TEXT] [--category all|fungal|bacterial|viral|nutritional|pest|environmental]\n\
                   [--severity all|low|medium|high|critical] [--crop NAME] [--remedy-type chemical|organic|biological|preventive]\n\
                   [--organic] [--premium] [--no-premium] [--id ID | --remedies ID | --counts]\n\
Prints matching diseases (default), one disease (--id), the remedies of one disease (--remedies), or per-category\n\
and per-severity counts (--counts) as JSON. The catalog comes from --catalog, then CROPDOC_CATALOG, then the bundled data.\n"
}
