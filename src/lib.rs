//! Extract hRecipe microformat recipes from web pages and write them out as
//! a plain-text (or JSON) report.

pub mod builder;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod model;
pub mod pipeline;
pub mod report;

pub use builder::{InputSource, RecipeImporter, RecipeImporterBuilder};
pub use config::ImportConfig;
pub use error::ImportError;
pub use extractors::{Extraction, FailurePolicy, HRecipeExtractor};
pub use model::Recipe;
pub use pipeline::{extract_from_html, fetch_recipes, import_to_file, ImportSummary};
pub use report::ReportFormat;
