use std::time::Duration;

use crate::{config::ImportConfig, extractors::Extraction, pipeline, ImportError};

/// Represents the input source for a recipe page
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Fetch the page from a URL
    Url(String),
    /// Use markup already in memory (e.g. a saved page)
    Html(String),
}

/// Builder for configuring and executing recipe imports
#[derive(Debug, Default)]
pub struct RecipeImporterBuilder {
    source: Option<InputSource>,
    config: ImportConfig,
}

impl RecipeImporterBuilder {
    /// Set the input source to a URL
    ///
    /// # Example
    /// ```
    /// use hrecipe_import::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder()
    ///     .url("https://example.com/recipe");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.source = Some(InputSource::Url(url.into()));
        self
    }

    /// Set the input source to HTML markup
    ///
    /// # Example
    /// ```
    /// use hrecipe_import::RecipeImporter;
    ///
    /// let extraction = RecipeImporter::builder()
    ///     .html(r#"<div class="hrecipe"><h1 class="fn">Toast</h1></div>"#)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(extraction.recipes[0].name, "Toast");
    /// ```
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.source = Some(InputSource::Html(html.into()));
        self
    }

    /// Start from an existing configuration instead of the defaults
    pub fn config(mut self, config: ImportConfig) -> Self {
        self.config = config;
        self
    }

    /// Set a timeout for HTTP requests, rounded up to whole seconds
    pub fn timeout(mut self, duration: Duration) -> Self {
        let secs = duration.as_secs() + u64::from(duration.subsec_nanos() > 0);
        self.config.timeout = secs.max(1);
        self
    }

    /// Set the user agent sent when fetching
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Fail the whole import when a recipe has no title, instead of
    /// skipping that recipe
    pub fn strict(mut self) -> Self {
        self.config.strict = true;
        self
    }

    /// Build and execute the extraction
    ///
    /// # Errors
    /// Returns `ImportError` if:
    /// - No input source was specified
    /// - URL fetch fails
    /// - The page body is empty
    /// - A recipe has no title and the import is strict
    pub fn build(self) -> Result<Extraction, ImportError> {
        let source = self.source.ok_or_else(|| {
            ImportError::BuilderError("No input source specified. Use .url() or .html()".to_string())
        })?;

        match source {
            InputSource::Url(url) => pipeline::fetch_recipes(&url, &self.config),
            InputSource::Html(html) => pipeline::extract_from_html("<memory>", &html, &self.config),
        }
    }
}

/// Main entry point for the builder API
pub struct RecipeImporter;

impl RecipeImporter {
    /// Creates a new builder for importing recipes
    pub fn builder() -> RecipeImporterBuilder {
        RecipeImporterBuilder::default()
    }
}
