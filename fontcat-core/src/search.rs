//! Search pipeline (made by FontLab https://www.fontlab.com/)

use anyhow::Result;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, warn};

use crate::caps::CapsRule;
use crate::category::Category;
use crate::font::Font;
use crate::query::Query;
use crate::rank::rank;

/// Filter and rank `catalog` for a category selector and raw query-box input.
///
/// Returns a view over the catalog: fonts in the category whose name contains
/// the term, ranked by relevance when the term is non-empty and otherwise in
/// catalog order. No match yields an empty vector.
pub fn search<'a>(catalog: &'a [Font], category: &Category, raw_input: &str) -> Vec<&'a Font> {
    let query = Query::new()
        .with_category(category.clone())
        .with_input(raw_input);
    search_query(catalog, &query)
}

/// Run an already parsed [`Query`] with the built-in caps rule.
pub fn search_query<'a>(catalog: &'a [Font], query: &Query) -> Vec<&'a Font> {
    run(CapsRule::standard(), catalog, query)
}

fn run<'a>(rule: &CapsRule, catalog: &'a [Font], query: &Query) -> Vec<&'a Font> {
    let filtered: Vec<&Font> = catalog
        .iter()
        .filter(|font| query.matches_with(rule, font))
        .collect();

    let results = if query.has_term() {
        rank(filtered, query.term())
    } else {
        filtered
    };

    debug!(
        category = %query.category(),
        term = query.term(),
        catalog = catalog.len(),
        matched = results.len(),
        "search complete"
    );
    results
}

/// Search engine bound to a specific caps rule.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    caps: CapsRule,
}

impl Searcher {
    pub fn new(caps: CapsRule) -> Self {
        for name in caps.shadowed_exceptions() {
            warn!(exception = name, "caps exception ignored: name is on the explicit caps list");
        }
        Self { caps }
    }

    pub fn caps_rule(&self) -> &CapsRule {
        &self.caps
    }

    pub fn search<'a>(
        &self,
        catalog: &'a [Font],
        category: &Category,
        raw_input: &str,
    ) -> Vec<&'a Font> {
        let query = Query::new()
            .with_category(category.clone())
            .with_input(raw_input);
        self.search_query(catalog, &query)
    }

    pub fn search_query<'a>(&self, catalog: &'a [Font], query: &Query) -> Vec<&'a Font> {
        run(&self.caps, catalog, query)
    }

    /// Evaluate many queries in parallel; results keep the order of `queries`.
    pub fn search_batch<'a>(
        &self,
        catalog: &'a [Font],
        queries: &[Query],
        opts: &SearchOptions,
    ) -> Result<Vec<Vec<&'a Font>>> {
        let run_batch = || -> Vec<Vec<&'a Font>> {
            queries
                .par_iter()
                .map(|query| self.search_query(catalog, query))
                .collect()
        };

        let results = if let Some(jobs) = opts.jobs {
            let pool = ThreadPoolBuilder::new().num_threads(jobs).build()?;
            pool.install(run_batch)
        } else {
            run_batch()
        };

        debug!(queries = queries.len(), jobs = ?opts.jobs, "batch complete");
        Ok(results)
    }
}

#[derive(Debug, Default, Clone)]
pub struct SearchOptions {
    pub jobs: Option<usize>,
}

/// [`Searcher::search_batch`] with the built-in caps rule.
pub fn search_batch<'a>(
    catalog: &'a [Font],
    queries: &[Query],
    opts: &SearchOptions,
) -> Result<Vec<Vec<&'a Font>>> {
    Searcher::default().search_batch(catalog, queries, opts)
}
