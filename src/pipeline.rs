use crate::config::ImportConfig;
use crate::error::ImportError;
use crate::extractors::{parse_document, Extraction, Extractor, HRecipeExtractor, ParsingContext};
use crate::fetchers::RequestFetcher;
use crate::report;
use log::info;
use std::path::{Path, PathBuf};

/// Outcome of a full import run.
#[derive(Debug)]
pub struct ImportSummary {
    pub recipes: usize,
    pub skipped: usize,
    pub outfile: PathBuf,
}

/// Fetch a page and extract every hrecipe on it.
///
/// This pipeline:
/// 1. Fetches HTML using RequestFetcher
/// 2. Parses the body into a document tree
/// 3. Runs the hRecipe extractor over the whole document
pub fn fetch_recipes(url: &str, config: &ImportConfig) -> Result<Extraction, ImportError> {
    let fetcher = RequestFetcher::new(Some(config.timeout_duration()), &config.user_agent)?;
    let html = fetcher.fetch(url)?;
    extract_from_html(url, &html, config)
}

/// Extract recipes from markup that is already in memory. `url` is only
/// used for diagnostics.
pub fn extract_from_html(
    url: &str,
    html: &str,
    config: &ImportConfig,
) -> Result<Extraction, ImportError> {
    let context = ParsingContext {
        url: url.to_string(),
        document: parse_document(html),
    };

    HRecipeExtractor::from_config(config).extract(&context)
}

/// Fetch, extract and write the report for `url`.
pub fn import_to_file(
    url: &str,
    outfile: &Path,
    config: &ImportConfig,
) -> Result<ImportSummary, ImportError> {
    let extraction = fetch_recipes(url, config)?;
    report::write_report(outfile, &extraction.recipes, config.format)?;

    info!(
        "Successfully parsed {} recipes ({} skipped)",
        extraction.recipes.len(),
        extraction.skipped.len()
    );

    Ok(ImportSummary {
        recipes: extraction.recipes.len(),
        skipped: extraction.skipped.len(),
        outfile: outfile.to_path_buf(),
    })
}
