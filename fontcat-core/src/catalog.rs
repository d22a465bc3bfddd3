//! Catalog loading (made by FontLab https://www.fontlab.com/)
//!
//! Catalogs arrive either as a bare JSON array of fonts or as a Google Fonts
//! web-font listing (`{"items": [...]}`). Several documents can be merged;
//! the first entry for a name wins.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::category::Category;
use crate::discovery::{CatalogDiscovery, PathDiscovery};
use crate::font::Font;
use crate::search::search;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Fonts(Vec<Font>),
    Listing { items: Vec<Font> },
}

impl CatalogDocument {
    fn into_fonts(self) -> Vec<Font> {
        match self {
            CatalogDocument::Fonts(fonts) => fonts,
            CatalogDocument::Listing { items } => items,
        }
    }
}

/// Read-only collection of fonts with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    fonts: Vec<Font>,
}

impl Catalog {
    /// Build a catalog, dropping entries whose name repeats an earlier one.
    pub fn new(fonts: Vec<Font>) -> Self {
        let mut catalog = Self::default();
        catalog.extend(fonts);
        catalog
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let doc: CatalogDocument =
            serde_json::from_reader(reader).context("parsing catalog JSON")?;
        Ok(Self::new(doc.into_fonts()))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: CatalogDocument = serde_json::from_str(json).context("parsing catalog JSON")?;
        Ok(Self::new(doc.into_fonts()))
    }

    /// Load one catalog document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("opening catalog {}", path.display()))?;
        let catalog = Self::from_reader(BufReader::new(file))
            .with_context(|| format!("reading catalog {}", path.display()))?;
        info!(path = %path.display(), fonts = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Discover catalog documents under `paths` and merge them in discovery order.
    pub fn load_paths(paths: &[PathBuf], follow_symlinks: bool) -> Result<Self> {
        let sources = PathDiscovery::new(paths.iter().cloned())
            .follow_symlinks(follow_symlinks)
            .discover()?;

        let mut merged = Self::default();
        for source in sources {
            let loaded = Self::load(&source.path)?;
            merged.extend(loaded.fonts);
        }
        Ok(merged)
    }

    /// Append fonts, skipping names already present.
    pub fn extend(&mut self, fonts: impl IntoIterator<Item = Font>) {
        let mut seen: HashSet<String> = self.fonts.iter().map(|f| f.name.clone()).collect();
        for font in fonts {
            if seen.insert(font.name.clone()) {
                self.fonts.push(font);
            } else {
                warn!(name = %font.name, "dropping duplicate catalog entry");
            }
        }
    }

    pub fn fonts(&self) -> &[Font] {
        &self.fonts
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Font> {
        self.fonts.iter()
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&Font> {
        self.fonts.iter().find(|font| font.name == name)
    }

    /// Run the search pipeline over this catalog.
    pub fn search(&self, category: &Category, raw_input: &str) -> Vec<&Font> {
        search(&self.fonts, category, raw_input)
    }
}

impl From<Vec<Font>> for Catalog {
    fn from(fonts: Vec<Font>) -> Self {
        Self::new(fonts)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Font;
    type IntoIter = std::slice::Iter<'a, Font>;

    fn into_iter(self) -> Self::IntoIter {
        self.fonts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_array_and_listing() {
        let bare = Catalog::from_json_str(r#"[{"name": "Lora", "category": "serif"}]"#)
            .expect("bare array");
        let listing = Catalog::from_json_str(
            r#"{"kind": "webfonts#webfontList", "items": [{"family": "Lora", "category": "serif", "variants": ["regular", "700"]}]}"#,
        )
        .expect("listing");

        assert_eq!(bare.len(), 1);
        assert_eq!(listing.len(), 1);
        assert_eq!(listing.fonts()[0].weights(), vec![400, 700]);
    }

    #[test]
    fn first_entry_wins_for_duplicate_names() {
        let catalog = Catalog::new(vec![
            Font::new("Lora", "serif"),
            Font::new("Lato", "sans-serif"),
            Font::new("Lora", "display"),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Lora").map(|f| f.category.as_str()), Some("serif"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Catalog::from_json_str(r#"{"fonts": 3}"#).unwrap_err();
        assert!(err.to_string().contains("parsing catalog JSON"));
    }
}
