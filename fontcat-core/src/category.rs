//! Category selectors and membership tests (made by FontLab https://www.fontlab.com/)

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::caps::CapsRule;
use crate::font::Font;

/// Category selector of the catalog UI.
///
/// Every variant except [`Category::All`] and [`Category::Caps`] compares
/// directly against the tag stored on a font. `Caps` is derived from the
/// font name. Tags outside the built-in set are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    All,
    Serif,
    SansSerif,
    Display,
    Cursive,
    Monospace,
    Caps,
    Other(String),
}

impl Category {
    /// Built-in selectors in the order the catalog page lists them.
    pub fn builtin() -> [Category; 7] {
        [
            Category::All,
            Category::Serif,
            Category::SansSerif,
            Category::Display,
            Category::Cursive,
            Category::Monospace,
            Category::Caps,
        ]
    }

    /// Parse a selector value. Never fails: unknown tags become `Other`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" | "all" => Category::All,
            "serif" => Category::Serif,
            "sans-serif" => Category::SansSerif,
            "display" => Category::Display,
            "cursive" => Category::Cursive,
            "monospace" => Category::Monospace,
            "caps" => Category::Caps,
            _ => Category::Other(trimmed.to_string()),
        }
    }

    /// Tag value as stored on fonts and used by selectors.
    pub fn as_str(&self) -> &str {
        match self {
            Category::All => "all",
            Category::Serif => "serif",
            Category::SansSerif => "sans-serif",
            Category::Display => "display",
            Category::Cursive => "cursive",
            Category::Monospace => "monospace",
            Category::Caps => "caps",
            Category::Other(tag) => tag,
        }
    }

    /// Human-facing label used in the search prefix and results counter.
    pub fn label(&self) -> &str {
        match self {
            Category::All => "All",
            Category::Serif => "Serif",
            Category::SansSerif => "Sans Serif",
            Category::Display => "Display",
            Category::Cursive => "Cursive",
            Category::Monospace => "Monospace",
            Category::Caps => "CAPS",
            Category::Other(tag) => tag,
        }
    }

    /// Placeholder prefix put in front of the query box, e.g. `Search CAPS Fonts: `.
    pub fn search_prefix(&self) -> String {
        format!("Search {} Fonts: ", self.label())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::parse(s))
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        Category::parse(&raw)
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        Category::parse(raw)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

/// Is `font` a member of `category`, using the built-in caps rule?
pub fn classify(font: &Font, category: &Category) -> bool {
    classify_with(CapsRule::standard(), font, category)
}

/// Membership test with a caller-supplied caps rule.
pub fn classify_with(rule: &CapsRule, font: &Font, category: &Category) -> bool {
    match category {
        Category::All => true,
        Category::Caps => rule.is_caps(&font.name),
        other => font.category == other.as_str(),
    }
}
