//! Name-derived CAPS classification (made by FontLab https://www.fontlab.com/)
//!
//! No catalog stores a "caps" category. A font belongs to it when its name is
//! on the explicit list, or when the name carries an `SC`/`Caps` word and is
//! not on the exception list. The three parts are kept as data so either list
//! can grow without touching the matching code.

use std::collections::HashSet;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex::Regex;

/// Small-caps and all-caps faces whose names carry no `SC`/`Caps` word, plus
/// `SC` faces that are always accepted.
pub const EXPLICIT_CAPS: &[&str] = &[
    "Aboreto",
    "Alegreya SC",
    "Alegreya Sans SC",
    "Almendra SC",
    "Amatic SC",
    "Bowlby One SC",
    "Bruno Ace SC",
    "Carrois Gothic SC",
    "Cormorant SC",
    "Diplomata SC",
    "Encode Sans SC",
    "Graduate",
    "Holtwood One SC",
    "IM Fell DW Pica SC",
    "IM Fell Double Pica SC",
    "IM Fell English SC",
    "IM Fell French Canon SC",
    "IM Fell Great Primer SC",
    "Marcellus SC",
    "Mate SC",
    "Monoton",
    "Overlock SC",
    "Patrick Hand SC",
    "Playfair Display SC",
    "Six Caps",
    "Spectral SC",
    "Shojumaru",
    "Vollkorn SC",
    "Ysabeau SC",
];

/// Names that match the pattern but are not caps-only faces: `SC` as the
/// Simplified Chinese suffix, and stylistic "Swash Caps" display families.
pub const CAPS_EXCEPTIONS: &[&str] = &[
    "Noto Sans SC",
    "Noto Serif SC",
    "Macondo Swash Caps",
    "Oleo Script Swash Caps",
    "Bilbo Swash Caps",
    "Delius Swash Caps",
    "Elsie Swash Caps",
];

/// ASCII word boundaries and ASCII case folding: a non-ASCII letter next to
/// `SC` still counts as a boundary.
pub const CAPS_PATTERN: &str = r"(?i-u)\b(SC|Caps)\b";

/// Rule table deciding CAPS membership from a font name.
#[derive(Debug, Clone)]
pub struct CapsRule {
    explicit: HashSet<String>,
    exceptions: HashSet<String>,
    pattern: Regex,
}

impl CapsRule {
    /// A rule with the given pattern and empty explicit/exception lists.
    pub fn new(pattern: Regex) -> Self {
        Self {
            explicit: HashSet::new(),
            exceptions: HashSet::new(),
            pattern,
        }
    }

    /// Compile `pattern` and start an empty rule from it.
    pub fn from_pattern(pattern: &str) -> Result<Self> {
        let re = Regex::new(pattern).with_context(|| format!("invalid caps pattern: {pattern}"))?;
        Ok(Self::new(re))
    }

    /// The shared built-in rule, compiled once per process.
    pub fn standard() -> &'static CapsRule {
        static STANDARD: OnceLock<CapsRule> = OnceLock::new();
        STANDARD.get_or_init(CapsRule::default)
    }

    pub fn with_explicit<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.explicit.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_exceptions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exceptions.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_pattern(mut self, pattern: Regex) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn is_explicit(&self, name: &str) -> bool {
        self.explicit.contains(name)
    }

    pub fn is_exception(&self, name: &str) -> bool {
        self.exceptions.contains(name)
    }

    /// Exceptions that never take effect because the name is also explicit.
    pub fn shadowed_exceptions(&self) -> Vec<&str> {
        let mut shadowed: Vec<&str> = self
            .exceptions
            .intersection(&self.explicit)
            .map(String::as_str)
            .collect();
        shadowed.sort_unstable();
        shadowed
    }

    pub fn pattern_matches(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }

    /// `explicit OR (pattern AND NOT exception)`.
    pub fn is_caps(&self, name: &str) -> bool {
        self.is_explicit(name) || (self.pattern_matches(name) && !self.is_exception(name))
    }
}

impl Default for CapsRule {
    fn default() -> Self {
        let pattern = Regex::new(CAPS_PATTERN).expect("built-in caps pattern compiles");
        Self::new(pattern)
            .with_explicit(EXPLICIT_CAPS.iter().copied())
            .with_exceptions(CAPS_EXCEPTIONS.iter().copied())
    }
}

/// Classify `name` with the built-in rule.
pub fn is_caps(name: &str) -> bool {
    CapsRule::standard().is_caps(name)
}
