//! Relevance ranking for name searches (made by FontLab https://www.fontlab.com/)

use std::borrow::Borrow;
use std::cmp::Reverse;

use crate::font::Font;

/// Added when the lowercased name starts with the term.
pub const PREFIX_SCORE: u8 = 2;
/// Added when the lowercased name contains the term anywhere.
pub const CONTAINS_SCORE: u8 = 1;

/// Additive relevance of `name` for a normalized `term`.
///
/// A prefix match also contains the term, so it scores 3; a match elsewhere
/// in the name scores 1; no match scores 0.
pub fn relevance(name: &str, term: &str) -> u8 {
    score_lowercased(&name.to_lowercase(), term)
}

fn score_lowercased(name: &str, term: &str) -> u8 {
    let mut score = 0;
    if name.starts_with(term) {
        score += PREFIX_SCORE;
    }
    if name.contains(term) {
        score += CONTAINS_SCORE;
    }
    score
}

/// Order fonts by descending relevance, then by lowercased name.
///
/// The sort is stable and uses no other key, so ranking an already ranked
/// list leaves it unchanged. An empty term keeps the input order.
pub fn rank<'a>(mut fonts: Vec<&'a Font>, term: &str) -> Vec<&'a Font> {
    sort_by_relevance(&mut fonts, term);
    fonts
}

/// In-place variant of [`rank`] for owned or borrowed fonts.
pub fn sort_by_relevance<F: Borrow<Font>>(fonts: &mut [F], term: &str) {
    if term.is_empty() {
        return;
    }

    fonts.sort_by_cached_key(|font| {
        let lowered = font.borrow().name.to_lowercase();
        (Reverse(score_lowercased(&lowered, term)), lowered)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fonts(names: &[&str]) -> Vec<Font> {
        names.iter().map(|name| Font::new(*name, "serif")).collect()
    }

    fn names(ranked: &[&Font]) -> Vec<String> {
        ranked.iter().map(|f| f.name.clone()).collect()
    }

    #[test]
    fn additive_scores() {
        assert_eq!(relevance("Garamond", "g"), 3);
        assert_eq!(relevance("Alegreya", "g"), 1);
        assert_eq!(relevance("Lato", "g"), 0);
    }

    #[test]
    fn prefix_group_precedes_contains_group() {
        let catalog = fonts(&["Garamond", "Georgia", "Alegreya", "Gentium", "Gothic"]);
        let ranked = rank(catalog.iter().collect(), "g");

        assert_eq!(
            names(&ranked),
            vec!["Garamond", "Gentium", "Georgia", "Gothic", "Alegreya"]
        );
    }

    #[test]
    fn ties_compare_case_insensitively() {
        let catalog = fonts(&["bodoni Moda", "Bitter", "BioRhyme"]);
        let ranked = rank(catalog.iter().collect(), "b");

        assert_eq!(names(&ranked), vec!["BioRhyme", "Bitter", "bodoni Moda"]);
    }

    #[test]
    fn ties_use_codepoint_order_for_accented_names() {
        let catalog = fonts(&["Élan", "Zilla Slab", "Alata"]);
        let ranked = rank(catalog.iter().collect(), "la");

        assert_eq!(names(&ranked), vec!["Alata", "Zilla Slab", "Élan"]);
    }

    #[test]
    fn empty_term_keeps_input_order() {
        let catalog = fonts(&["Zilla Slab", "Arvo", "Merriweather"]);
        let ranked = rank(catalog.iter().collect(), "");

        assert_eq!(names(&ranked), vec!["Zilla Slab", "Arvo", "Merriweather"]);
    }

    #[test]
    fn sorts_owned_fonts_in_place() {
        let mut catalog = fonts(&["Noto Serif", "Lora", "Noticia Text"]);
        sort_by_relevance(&mut catalog, "no");

        let ordered: Vec<&str> = catalog.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(ordered, vec!["Noticia Text", "Noto Serif", "Lora"]);
    }
}
