//! Class-token queries over a parsed HTML tree.

use scraper::ElementRef;

/// Class tokens recognized by the hRecipe microformat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Recipe,
    Title,
    Ingredient,
    Quantity,
    Unit,
    Name,
    Yield,
    Instructions,
    Duration,
    Summary,
    Author,
    Published,
    Nutrition,
    Tag,
}

impl Marker {
    pub fn as_str(self) -> &'static str {
        match self {
            Marker::Recipe => "hrecipe",
            Marker::Title => "fn",
            Marker::Ingredient => "ingredient",
            Marker::Quantity => "quantity",
            Marker::Unit => "unit",
            Marker::Name => "name",
            Marker::Yield => "yield",
            Marker::Instructions => "instructions",
            Marker::Duration => "duration",
            Marker::Summary => "summary",
            Marker::Author => "author",
            Marker::Published => "published",
            Marker::Nutrition => "nutrition",
            Marker::Tag => "tag",
        }
    }
}

/// Whether the element's class attribute contains the marker as a token.
pub fn has_marker(element: &ElementRef, marker: Marker) -> bool {
    element.value().classes().any(|class| class == marker.as_str())
}

/// Descendants of `scope` in document order, `scope` itself excluded.
fn descendants<'a>(scope: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    scope.descendants().skip(1).filter_map(ElementRef::wrap)
}

pub fn find_first<'a>(scope: ElementRef<'a>, marker: Marker) -> Option<ElementRef<'a>> {
    descendants(scope).find(|el| has_marker(el, marker))
}

pub fn find_all<'a>(scope: ElementRef<'a>, marker: Marker) -> Vec<ElementRef<'a>> {
    descendants(scope)
        .filter(|el| has_marker(el, marker))
        .collect()
}

/// Text of every descendant text node, joined in document order with
/// whitespace runs collapsed to a single space.
pub fn text_content(element: ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
