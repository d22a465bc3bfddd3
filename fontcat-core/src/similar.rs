//! Catalog stand-ins for well-known fonts (made by FontLab https://www.fontlab.com/)

use crate::font::Font;

/// Well-known font names and the catalog families closest to them, best first.
const SIMILAR_FONTS: &[(&str, &[&str])] = &[
    // Serif
    ("Georgia", &["Gelasio", "EB Garamond", "Cormorant Garamond"]),
    ("Times New Roman", &["Times New Roman", "Lora", "PT Serif"]),
    ("Garamond", &["EB Garamond", "Cormorant Garamond", "Gelasio"]),
    ("Baskerville", &["Libre Baskerville", "Cormorant Garamond"]),
    ("Palatino", &["PT Serif", "Lora", "Cormorant Garamond"]),
    ("Didot", &["Cormorant Garamond", "PT Serif"]),
    ("Bodoni", &["Libre Bodoni", "Cormorant Garamond"]),
    ("Caslon", &["Libre Caslon Text", "Cormorant Garamond"]),
    // Sans serif
    ("Helvetica", &["Roboto", "Noto Sans", "Open Sans"]),
    ("Arial", &["Arimo", "Roboto", "Noto Sans"]),
    ("Verdana", &["Open Sans", "Roboto", "Noto Sans"]),
    ("Futura", &["Montserrat", "Noto Sans", "Roboto"]),
    ("Gill Sans", &["Gill Sans Nova", "Open Sans"]),
    ("Univers", &["Noto Sans", "Roboto"]),
    ("Frutiger", &["Open Sans", "Roboto"]),
    // Display
    ("Bauhaus", &["Bauhaus 93", "Archivo Black"]),
    ("Impact", &["Bebas Neue", "Anton"]),
    ("Cooper Black", &["Black Ops One", "Anton"]),
    // Monospace
    ("Courier", &["Courier Prime", "Roboto Mono"]),
    ("Consolas", &["Roboto Mono", "Source Code Pro"]),
    ("Lucida Console", &["Roboto Mono", "Inconsolata"]),
    // Script
    ("Brush Script", &["Brush Script MT", "Pacifico"]),
    ("Lobster", &["Lobster", "Pacifico"]),
    ("Bilbo", &["Bilbo Swash Caps", "Pacifico"]),
    // Other
    ("Comic Sans MS", &["Comic Neue", "Fredoka One"]),
    ("Papyrus", &["Papyrus", "Pacifico"]),
    ("Trajan", &["Cinzel", "Cormorant Garamond"]),
    ("Baskerville Old Face", &["Libre Baskerville", "Cormorant Garamond"]),
    ("Gotham", &["Montserrat", "Roboto"]),
];

/// Suggested stand-ins for `name`.
///
/// Exact names are tried first, then a trimmed case-insensitive lookup.
pub fn similar_to(name: &str) -> Option<&'static [&'static str]> {
    if let Some((_, found)) = SIMILAR_FONTS.iter().find(|(known, _)| *known == name) {
        return Some(*found);
    }

    let wanted = name.trim();
    SIMILAR_FONTS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(wanted))
        .map(|(_, found)| *found)
}

/// Names with an entry in the table, in table order.
pub fn known_fonts() -> impl Iterator<Item = &'static str> {
    SIMILAR_FONTS.iter().map(|(known, _)| *known)
}

/// Stand-ins for `name` that exist in `catalog`, in suggestion order.
pub fn suggest<'a>(catalog: &'a [Font], name: &str) -> Vec<&'a Font> {
    let Some(candidates) = similar_to(name) else {
        return Vec::new();
    };

    candidates
        .iter()
        .filter_map(|wanted| {
            catalog
                .iter()
                .find(|font| font.name.eq_ignore_ascii_case(wanted))
        })
        .collect()
}
