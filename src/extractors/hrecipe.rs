use super::query::{find_all, find_first, has_marker, text_content, Marker};
use super::{Extraction, Extractor, ParsingContext};
use crate::config::ImportConfig;
use crate::error::ImportError;
use crate::model::Recipe;
use log::{debug, info, warn};
use scraper::{ElementRef, Html};

/// What to do with a fragment that has no title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log it, keep the error in [`Extraction::skipped`] and carry on.
    #[default]
    Skip,
    /// Fail the whole extraction.
    Abort,
}

/// A subtree rooted at an element marked `hrecipe`.
#[derive(Debug, Clone, Copy)]
pub struct RecipeFragment<'a> {
    pub index: usize,
    pub root: ElementRef<'a>,
}

#[derive(Debug, Default)]
pub struct HRecipeExtractor {
    policy: FailurePolicy,
}

impl HRecipeExtractor {
    pub fn new(policy: FailurePolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: &ImportConfig) -> Self {
        let policy = if config.strict {
            FailurePolicy::Abort
        } else {
            FailurePolicy::Skip
        };
        Self::new(policy)
    }

    /// Every element carrying the `hrecipe` token, in document order.
    pub fn fragments<'a>(&self, document: &'a Html) -> Vec<RecipeFragment<'a>> {
        let root = document.root_element();
        let mut roots = Vec::new();
        if has_marker(&root, Marker::Recipe) {
            roots.push(root);
        }
        roots.extend(find_all(root, Marker::Recipe));

        roots
            .into_iter()
            .enumerate()
            .map(|(index, root)| RecipeFragment { index, root })
            .collect()
    }

    pub fn extract_document(&self, document: &Html) -> Result<Extraction, ImportError> {
        let fragments = self.fragments(document);
        info!("Found {} recipes", fragments.len());

        let mut extraction = Extraction::default();
        for fragment in &fragments {
            match extract_fragment(fragment) {
                Ok(recipe) => {
                    for (key, value) in recipe.fields() {
                        debug!("{} : {}", key, value);
                    }
                    extraction.recipes.push(recipe);
                }
                Err(e) if self.policy == FailurePolicy::Skip => {
                    warn!("Skipping recipe: {}", e);
                    extraction.skipped.push(e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(extraction)
    }
}

impl Extractor for HRecipeExtractor {
    fn extract(&self, context: &ParsingContext) -> Result<Extraction, ImportError> {
        debug!("Extracting hrecipe fragments from {}", context.url);
        self.extract_document(&context.document)
    }
}

/// Build a [`Recipe`] from one fragment. Only a missing `fn` is an error;
/// every other absent field is left out of the record.
pub fn extract_fragment(fragment: &RecipeFragment) -> Result<Recipe, ImportError> {
    let root = fragment.root;

    let name = find_first(root, Marker::Title)
        .map(text_content)
        .ok_or_else(|| ImportError::MissingField {
            index: fragment.index,
            field: Marker::Title.as_str(),
        })?;

    let ingredients = find_all(root, Marker::Ingredient)
        .into_iter()
        .map(ingredient_text)
        .collect();

    Ok(Recipe {
        name,
        ingredients,
        recipe_yield: first_text(root, Marker::Yield),
        instructions: all_texts(root, Marker::Instructions),
        duration: first_text(root, Marker::Duration),
        summary: first_text(root, Marker::Summary),
        author: first_text(root, Marker::Author),
        published: first_text(root, Marker::Published),
        nutrition: first_text(root, Marker::Nutrition),
        tags: all_texts(root, Marker::Tag),
    })
}

/// `"{quantity} {unit} {name}"` when all three parts are tagged, otherwise
/// the element's whole text. Partial tagging never composes.
fn ingredient_text(ingredient: ElementRef) -> String {
    let part = |marker: Marker| find_first(ingredient, marker).map(text_content);

    match (part(Marker::Quantity), part(Marker::Unit), part(Marker::Name)) {
        (Some(quantity), Some(unit), Some(name)) => format!("{quantity} {unit} {name}"),
        _ => text_content(ingredient),
    }
}

fn first_text(root: ElementRef, marker: Marker) -> Option<String> {
    find_first(root, marker).map(text_content)
}

fn all_texts(root: ElementRef, marker: Marker) -> Option<Vec<String>> {
    let texts: Vec<String> = find_all(root, marker).into_iter().map(text_content).collect();
    if texts.is_empty() {
        None
    } else {
        Some(texts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Extraction {
        let document = Html::parse_document(html);
        HRecipeExtractor::default()
            .extract_document(&document)
            .unwrap()
    }

    #[test]
    fn test_no_fragments_is_empty_not_error() {
        let extraction = extract("<html><body><h1 class=\"fn\">Not a recipe</h1></body></html>");
        assert!(extraction.recipes.is_empty());
        assert!(extraction.skipped.is_empty());
        assert_eq!(extraction.fragments_found(), 0);
    }

    #[test]
    fn test_fragment_on_any_tag() {
        let extraction = extract(
            r#"<section class="hrecipe"><b class="fn">A</b></section>
               <article class="post hrecipe"><b class="fn">B</b></article>
               <li class="hrecipe"><b class="fn">C</b></li>"#,
        );
        let names: Vec<_> = extraction.recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_fields_are_scoped_to_fragment() {
        let extraction = extract(
            r#"<p class="author">Site owner</p>
               <div class="hrecipe"><h2 class="fn">Soup</h2></div>"#,
        );
        assert_eq!(extraction.recipes.len(), 1);
        assert_eq!(extraction.recipes[0].author, None);
    }

    #[test]
    fn test_composed_ingredient() {
        let extraction = extract(
            r#"<div class="hrecipe"><span class="fn">Pie</span>
               <li class="ingredient">
                 <span class="quantity"> 2 </span>
                 <span class="unit">cups</span>
                 <span class="name">flour</span>, sifted
               </li></div>"#,
        );
        assert_eq!(extraction.recipes[0].ingredients, vec!["2 cups flour"]);
    }

    #[test]
    fn test_partially_tagged_ingredient_uses_full_text() {
        let extraction = extract(
            r#"<div class="hrecipe"><span class="fn">Pie</span>
               <li class="ingredient"><span class="quantity">3</span> <span class="name">eggs</span>, beaten</li>
               </div>"#,
        );
        assert_eq!(extraction.recipes[0].ingredients, vec!["3 eggs, beaten"]);
    }

    #[test]
    fn test_single_fields_take_first_match() {
        let extraction = extract(
            r#"<div class="hrecipe"><span class="fn">Pie</span>
               <span class="yield">8 slices</span><span class="yield">1 pie</span>
               <span class="duration">1 hour</span>
               <p class="summary">Sweet</p>
               <span class="author">Ann</span>
               <span class="published">2012-07-01</span>
               <div class="nutrition">300 kcal</div>
               </div>"#,
        );
        let recipe = &extraction.recipes[0];
        assert_eq!(recipe.recipe_yield.as_deref(), Some("8 slices"));
        assert_eq!(recipe.duration.as_deref(), Some("1 hour"));
        assert_eq!(recipe.summary.as_deref(), Some("Sweet"));
        assert_eq!(recipe.author.as_deref(), Some("Ann"));
        assert_eq!(recipe.published.as_deref(), Some("2012-07-01"));
        assert_eq!(recipe.nutrition.as_deref(), Some("300 kcal"));
    }

    #[test]
    fn test_missing_title_skips_fragment() {
        let extraction = extract(
            r#"<div class="hrecipe"><li class="ingredient">salt</li></div>
               <div class="hrecipe"><span class="fn">Bread</span></div>"#,
        );
        assert_eq!(extraction.recipes.len(), 1);
        assert_eq!(extraction.recipes[0].name, "Bread");
        assert_eq!(extraction.fragments_found(), 2);
        assert!(matches!(
            extraction.skipped[0],
            ImportError::MissingField { index: 0, field: "fn" }
        ));
    }

    #[test]
    fn test_missing_title_aborts_when_strict() {
        let document = Html::parse_document(
            r#"<div class="hrecipe"><span class="fn">Bread</span></div>
               <div class="hrecipe"><li class="ingredient">salt</li></div>"#,
        );
        let result = HRecipeExtractor::new(FailurePolicy::Abort).extract_document(&document);
        assert!(matches!(
            result,
            Err(ImportError::MissingField { index: 1, .. })
        ));
    }

    #[test]
    fn test_strict_config_selects_abort() {
        let config = ImportConfig {
            strict: true,
            ..Default::default()
        };
        assert_eq!(
            HRecipeExtractor::from_config(&config).policy,
            FailurePolicy::Abort
        );
        assert_eq!(
            HRecipeExtractor::from_config(&ImportConfig::default()).policy,
            FailurePolicy::Skip
        );
    }
}
