//! Catalog font records (made by FontLab https://www.fontlab.com/)

use serde::{Deserialize, Serialize};

/// One entry of a font catalog.
///
/// Entries are created once when a catalog is loaded and never mutated by the
/// search engine. `family` is accepted as an alias for `name` so that Google
/// Fonts web-font listings deserialize directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    #[serde(alias = "family")]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subsets: Vec<String>,
}

impl Font {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            variants: Vec::new(),
            subsets: Vec::new(),
        }
    }

    pub fn with_variants<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants = variants.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_subsets<I, S>(mut self, subsets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subsets = subsets.into_iter().map(Into::into).collect();
        self
    }

    /// Numeric weights advertised by the variant list, sorted and deduplicated.
    ///
    /// `regular` and `italic` count as 400; strings without a leading number
    /// are skipped.
    pub fn weights(&self) -> Vec<u16> {
        let mut weights: Vec<u16> = self
            .variants
            .iter()
            .filter_map(|variant| variant_weight(variant))
            .collect();
        weights.sort_unstable();
        weights.dedup();
        weights
    }

    pub fn has_italic(&self) -> bool {
        self.variants
            .iter()
            .any(|variant| variant.trim().to_ascii_lowercase().ends_with("italic"))
    }
}

fn variant_weight(variant: &str) -> Option<u16> {
    let variant = variant.trim().to_ascii_lowercase();
    if variant == "regular" || variant == "italic" {
        return Some(400);
    }

    let digits: String = variant.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
