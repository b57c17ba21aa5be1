use serde::Serialize;

/// A recipe extracted from one hrecipe fragment.
///
/// Optional fields are `None` when the page has no element for them; an
/// empty string never stands in for a missing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub name: String,
    #[serde(rename = "ingredient")]
    pub ingredients: Vec<String>,
    #[serde(rename = "yield", skip_serializing_if = "Option::is_none")]
    pub recipe_yield: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<String>,
    #[serde(rename = "tag", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Recipe {
    /// Present fields as `(key, value)` pairs, repeating fields rendered as
    /// a bracketed list. Used for diagnostics.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("name", self.name.clone()),
            ("ingredient", format!("{:?}", self.ingredients)),
        ];

        let singles = [
            ("yield", &self.recipe_yield),
            ("duration", &self.duration),
            ("summary", &self.summary),
            ("author", &self.author),
            ("published", &self.published),
            ("nutrition", &self.nutrition),
        ];
        for (key, value) in singles {
            if let Some(value) = value {
                fields.push((key, value.clone()));
            }
        }

        if let Some(instructions) = &self.instructions {
            fields.push(("instructions", format!("{instructions:?}")));
        }
        if let Some(tags) = &self.tags {
            fields.push(("tag", format!("{tags:?}")));
        }

        fields
    }
}
