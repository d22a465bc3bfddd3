//! Query normalization and matching (made by FontLab https://www.fontlab.com/)

use crate::caps::CapsRule;
use crate::category::{classify_with, Category};
use crate::font::Font;

/// Extract the search term from raw query-box input.
///
/// The box may carry a `Search <Category> Fonts: ` prefix. Everything after
/// the first colon is the term; without a colon the whole input is. Either
/// way the term is trimmed and lowercased, and an empty term matches all.
pub fn normalize(raw: &str) -> String {
    match raw.split_once(':') {
        Some((_, rest)) => rest.trim().to_lowercase(),
        None => raw.trim().to_lowercase(),
    }
}

/// Case-insensitive substring test of `term` (already normalized) against the font name.
pub fn matches(font: &Font, term: &str) -> bool {
    term.is_empty() || font.name.to_lowercase().contains(term)
}

/// A category selection plus a normalized search term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    category: Category,
    term: String,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the two UI values: a selector tag and raw query-box input.
    pub fn parse(category: &str, raw_input: &str) -> Self {
        Self::new()
            .with_category(Category::parse(category))
            .with_input(raw_input)
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Set the term from raw input, stripping any display prefix.
    pub fn with_input(mut self, raw_input: &str) -> Self {
        self.term = normalize(raw_input);
        self
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn has_term(&self) -> bool {
        !self.term.is_empty()
    }

    /// Check category membership and the term against one font.
    pub fn matches(&self, font: &Font) -> bool {
        self.matches_with(CapsRule::standard(), font)
    }

    pub fn matches_with(&self, rule: &CapsRule, font: &Font) -> bool {
        classify_with(rule, font, &self.category) && matches(font, &self.term)
    }
}
