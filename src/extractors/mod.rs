use crate::error::ImportError;
use crate::model::Recipe;
use log::debug;
use scraper::Html;

mod hrecipe;
pub mod query;

pub use self::hrecipe::{extract_fragment, FailurePolicy, HRecipeExtractor, RecipeFragment};

pub struct ParsingContext {
    pub url: String,
    pub document: Html,
}

/// Records pulled out of one document, in document order.
#[derive(Debug, Default)]
pub struct Extraction {
    pub recipes: Vec<Recipe>,
    /// Fragments that could not be turned into a record.
    pub skipped: Vec<ImportError>,
}

impl Extraction {
    pub fn fragments_found(&self) -> usize {
        self.recipes.len() + self.skipped.len()
    }
}

pub trait Extractor {
    fn extract(&self, context: &ParsingContext) -> Result<Extraction, ImportError>;
}

/// Parse a fetched body into a document tree.
///
/// html5ever recovers from any malformed markup, an empty body included, so
/// parsing never fails; recovered errors are only logged.
pub fn parse_document(raw: &str) -> Html {
    let document = Html::parse_document(raw);
    if !document.errors.is_empty() {
        debug!("Recovered from {} HTML parse errors", document.errors.len());
    }
    document
}
