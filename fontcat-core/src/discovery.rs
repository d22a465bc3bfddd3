//! Catalog file discovery for fontcat-core (made by FontLab https://www.fontlab.com/)

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use walkdir::WalkDir;

/// Path to a candidate catalog document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSourceRef {
    pub path: PathBuf,
}

/// Trait for enumerating catalog documents from some backing store.
pub trait CatalogDiscovery {
    fn discover(&self) -> Result<Vec<CatalogSourceRef>>;
}

/// Recursive filesystem walker that collects JSON catalog documents.
///
/// A root naming a file is taken as-is whatever its extension; directory
/// roots contribute every `*.json` below them, sorted by path.
#[derive(Debug, Clone)]
pub struct PathDiscovery {
    roots: Vec<PathBuf>,
    follow_symlinks: bool,
}

impl PathDiscovery {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let roots = roots.into_iter().map(Into::into).collect();
        Self {
            roots,
            follow_symlinks: false,
        }
    }

    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}

impl CatalogDiscovery for PathDiscovery {
    fn discover(&self) -> Result<Vec<CatalogSourceRef>> {
        let mut found = Vec::new();

        for root in &self.roots {
            if !root.exists() {
                return Err(anyhow!("catalog path does not exist: {}", root.display()));
            }

            if root.is_file() {
                found.push(CatalogSourceRef { path: root.clone() });
                continue;
            }

            let mut nested: Vec<CatalogSourceRef> = Vec::new();
            for entry in WalkDir::new(root).follow_links(self.follow_symlinks) {
                let entry = entry?;
                if entry.file_type().is_file() && is_catalog(entry.path()) {
                    nested.push(CatalogSourceRef {
                        path: entry.path().to_path_buf(),
                    });
                }
            }
            nested.sort_by(|a, b| a.path.cmp(&b.path));
            found.extend(nested);
        }

        Ok(found)
    }
}

fn is_catalog(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
