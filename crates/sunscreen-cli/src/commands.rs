use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, info, info_span};

use sunscreen_cli::batch::{BatchResult, sanitize_batch};
use sunscreen_model::FilterCatalog;
use sunscreen_standards::{CatalogReport, load_catalog, load_default_catalog};

use crate::cli::{CatalogArgs, OutputFormatArg, SanitizeArgs};
use crate::summary::{print_batch_summary, print_catalog_report};

pub fn run_sanitize(args: &SanitizeArgs, catalog_path: Option<&Path>) -> Result<BatchResult> {
    let span = info_span!("sanitize", input = %args.input.display());
    let _guard = span.enter();

    let catalog = open_catalog(catalog_path)?;
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let document: Value = serde_json::from_str(&text)
        .with_context(|| format!("parse {} as JSON", args.input.display()))?;

    let mut result = sanitize_batch(&document, &catalog);
    if args.sort {
        result.sort_by_brand_product();
        debug!("sorted sanitized records by brand and product");
    }

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&result).context("serialize batch result")?;
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "wrote sanitized output");
    }

    match args.format {
        OutputFormatArg::Json if args.output.is_none() => {
            let json = serde_json::to_string_pretty(&result).context("serialize batch result")?;
            println!("{json}");
        }
        OutputFormatArg::Json => {}
        OutputFormatArg::Table => print_batch_summary(&result),
    }
    Ok(result)
}

pub fn run_catalog(args: &CatalogArgs, catalog_path: Option<&Path>) -> Result<()> {
    let catalog = open_catalog(catalog_path)?;
    let report = CatalogReport::from_catalog(&catalog);
    match args.format {
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&report).context("serialize catalog report")?;
            println!("{json}");
        }
        OutputFormatArg::Table => print_catalog_report(&catalog, &report),
    }
    Ok(())
}

fn open_catalog(path: Option<&Path>) -> Result<FilterCatalog> {
    match path {
        Some(path) => {
            load_catalog(path).with_context(|| format!("load catalog {}", path.display()))
        }
        None => load_default_catalog().context("load default catalog"),
    }
}
