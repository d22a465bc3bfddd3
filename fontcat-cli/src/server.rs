//! HTTP server for fontcat (made by FontLab https://www.fontlab.com/)
//!
//! Serves the search engine over a small JSON API. The catalog is loaded once
//! at startup and shared read-only between requests; each search is pure, so
//! handlers need no locking.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{debug, info};

use fontcat_core::catalog::Catalog;
use fontcat_core::category::Category;
use fontcat_core::font::Font;
use fontcat_core::output::results_counter;
use fontcat_core::search::Searcher;
use fontcat_core::similar::{similar_to, suggest};

struct AppState {
    catalog: Catalog,
    searcher: Searcher,
}

/// Body of `POST /search`. Every field is optional.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    /// Category selector tag (`all` when absent)
    pub category: String,
    /// Raw search box input, display prefix included or not
    pub query: String,
    /// Return only font names instead of full records
    pub names_only: bool,
    /// Maximum number of fonts returned; `count` still reports the full total
    pub limit: Option<usize>,
}

/// Response of `POST /search`.
///
/// Exactly one of `fonts` and `names` is populated, depending on `names_only`.
/// A `count` of zero is the "no results" state.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub count: usize,
    pub counter: String,
    pub fonts: Option<Vec<Font>>,
    pub names: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub tag: String,
    pub label: String,
    pub prefix: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SimilarRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarResponse {
    pub name: String,
    /// Every known stand-in, whether or not the catalog carries it
    pub suggestions: Vec<String>,
    /// Stand-ins present in the served catalog, in suggestion order
    pub in_catalog: Vec<String>,
}

/// Bind `bind` and serve until the process is stopped.
pub async fn serve(bind: &str, catalog: Catalog, searcher: Searcher) -> Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("binding HTTP server to {bind}"))?;

    info!(%bind, fonts = catalog.len(), "serving catalog");
    axum::serve(listener, router_with(catalog, searcher))
        .await
        .context("serving HTTP")?;
    Ok(())
}

/// Router over `catalog` with the built-in caps rule.
pub fn router(catalog: Catalog) -> Router {
    router_with(catalog, Searcher::default())
}

pub fn router_with(catalog: Catalog, searcher: Searcher) -> Router {
    let state = Arc::new(AppState { catalog, searcher });

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/categories", get(categories_handler))
        .route("/search", post(search_handler))
        .route("/similar", post(similar_handler))
        .with_state(state)
}

async fn categories_handler() -> Json<Vec<CategoryInfo>> {
    let infos = Category::builtin()
        .into_iter()
        .map(|category| CategoryInfo {
            tag: category.as_str().to_string(),
            label: category.label().to_string(),
            prefix: category.search_prefix(),
        })
        .collect();
    Json(infos)
}

async fn search_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    if matches!(req.limit, Some(0)) {
        return Err((
            StatusCode::BAD_REQUEST,
            "limit must be at least 1 when provided".to_string(),
        ));
    }

    let category = Category::parse(&req.category);
    let mut found = state
        .searcher
        .search(state.catalog.fonts(), &category, &req.query);
    let count = found.len();
    if let Some(limit) = req.limit {
        found.truncate(limit);
    }
    debug!(%category, query = %req.query, count, "search request");

    let counter = results_counter(count, &category);
    let response = if req.names_only {
        SearchResponse {
            count,
            counter,
            fonts: None,
            names: Some(found.iter().map(|f| f.name.clone()).collect()),
        }
    } else {
        SearchResponse {
            count,
            counter,
            fonts: Some(found.into_iter().cloned().collect()),
            names: None,
        }
    };
    Ok(Json(response))
}

async fn similar_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SimilarRequest>,
) -> Result<Json<SimilarResponse>, (StatusCode, String)> {
    let suggestions = similar_to(&req.name).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            format!("no similar fonts known for {}", req.name),
        )
    })?;

    let in_catalog = suggest(state.catalog.fonts(), &req.name)
        .into_iter()
        .map(|f| f.name.clone())
        .collect();

    Ok(Json(SimilarResponse {
        name: req.name,
        suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        in_catalog,
    }))
}
