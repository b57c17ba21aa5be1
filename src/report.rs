use crate::error::ImportError;
use crate::model::Recipe;
use log::debug;
use serde::Deserialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Plain-text blocks, one per recipe
    #[default]
    Text,
    /// Pretty-printed JSON array of recipes
    Json,
}

pub fn render(recipes: &[Recipe], format: ReportFormat) -> Result<String, ImportError> {
    match format {
        ReportFormat::Text => Ok(recipes
            .iter()
            .map(render_recipe)
            .collect::<Vec<_>>()
            .join("\n")),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(recipes)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Render one recipe as a plain-text block. Optional sections are left out
/// entirely when the recipe has no value for them.
pub fn render_recipe(recipe: &Recipe) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", recipe.name);
    let _ = writeln!(out, "{}", "-".repeat(recipe.name.chars().count()));

    if let Some(author) = &recipe.author {
        let _ = write!(out, "\nAuthor: {author}\n");
    }
    if let Some(published) = &recipe.published {
        let _ = write!(out, "\nPublished: {published}\n");
    }
    if let Some(summary) = &recipe.summary {
        let _ = write!(out, "\n{summary}\n");
    }
    if let Some(duration) = &recipe.duration {
        let _ = write!(out, "\nTime: {duration}\n");
    }

    out.push_str("\nIngredients\n-----------\n");
    for ingredient in &recipe.ingredients {
        let _ = writeln!(out, " - {ingredient}");
    }

    if let Some(instructions) = &recipe.instructions {
        out.push_str("\nInstructions\n------------\n");
        for (i, instruction) in instructions.iter().enumerate() {
            let _ = writeln!(out, " {}. {}", i + 1, instruction);
        }
    }

    if let Some(recipe_yield) = &recipe.recipe_yield {
        let _ = write!(out, "\nYields: {recipe_yield}\n");
    }
    if let Some(nutrition) = &recipe.nutrition {
        let _ = write!(out, "\nNutrition: {nutrition}\n");
    }
    if let Some(tags) = &recipe.tags {
        let _ = write!(out, "\nTags: {}\n", tags.join(" "));
    }

    out
}

pub fn write_report(
    path: &Path,
    recipes: &[Recipe],
    format: ReportFormat,
) -> Result<(), ImportError> {
    let report = render(recipes, format)?;
    fs::write(path, report)?;
    debug!("Wrote {} recipes to {}", recipes.len(), path.display());
    Ok(())
}
