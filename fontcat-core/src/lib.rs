//! fontcat-core: search and classification engine for font catalogs
//!
//! Given a catalog, a category selector and the raw text of a search box,
//! [`search::search`] returns the matching fonts ranked for display:
//!
//! 1. the raw input is normalized to a term ([`query::normalize`]), dropping
//!    any `Search <Category> Fonts: ` prefix;
//! 2. fonts are kept when they belong to the category
//!    ([`category::classify`]) and their name contains the term;
//! 3. with a non-empty term, results are ordered by relevance
//!    ([`rank::rank`]): prefix matches first, then alphabetically.
//!
//! The CAPS category is not stored on fonts. It is derived from the name by
//! the rule table in [`caps`].
//!
//! ```rust
//! use fontcat_core::category::Category;
//! use fontcat_core::font::Font;
//! use fontcat_core::search::search;
//!
//! let catalog = vec![
//!     Font::new("Alegreya SC", "serif"),
//!     Font::new("Almendra SC", "serif"),
//!     Font::new("Roboto", "sans-serif"),
//! ];
//!
//! let found = search(&catalog, &Category::Caps, "Search CAPS Fonts: al");
//! let names: Vec<&str> = found.iter().map(|f| f.name.as_str()).collect();
//! assert_eq!(names, ["Alegreya SC", "Almendra SC"]);
//! ```
//!
//! Everything on the search path is pure and infallible; only catalog I/O
//! ([`catalog`], [`discovery`]) and output writing return `anyhow::Result`.
//!
//! Made by FontLab https://www.fontlab.com/

pub mod caps;
pub mod catalog;
pub mod category;
pub mod discovery;
pub mod font;
pub mod output;
pub mod preview;
pub mod query;
pub mod rank;
pub mod search;
pub mod similar;
