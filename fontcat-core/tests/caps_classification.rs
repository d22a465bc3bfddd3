use fontcat_core::caps::{is_caps, CapsRule, CAPS_EXCEPTIONS, EXPLICIT_CAPS};
use fontcat_core::category::{classify, classify_with, Category};
use fontcat_core::font::Font;

#[test]
fn documented_examples() {
    assert!(classify(&Font::new("Alegreya SC", "serif"), &Category::Caps));
    assert!(!classify(&Font::new("Noto Sans SC", "sans-serif"), &Category::Caps));
    assert!(!classify(&Font::new("Bilbo Swash Caps", "cursive"), &Category::Caps));
    assert!(classify(&Font::new("Six Caps", "sans-serif"), &Category::Caps));
}

#[test]
fn every_explicit_name_is_caps() {
    for name in EXPLICIT_CAPS {
        assert!(is_caps(name), "{name} should be caps");
    }
}

#[test]
fn every_exception_matches_pattern_but_is_not_caps() {
    let rule = CapsRule::standard();
    for name in CAPS_EXCEPTIONS {
        assert!(rule.pattern_matches(name), "{name} should hit the pattern");
        assert!(!rule.is_caps(name), "{name} should be excluded");
    }
}

#[test]
fn unlisted_sc_names_are_caps_by_pattern() {
    assert!(is_caps("Cinzel Decorative SC"));
    assert!(is_caps("Some Font Caps"));
    assert!(!is_caps("Noto Sans TC"));
    assert!(!is_caps("Oswald"));
}

#[test]
fn caps_ignores_stored_category_tag() {
    let tagged_caps = Font::new("Roboto", "caps");
    assert!(!classify(&tagged_caps, &Category::Caps));
}

#[test]
fn stored_categories_compare_by_equality() {
    let fonts = [
        Font::new("Lora", "serif"),
        Font::new("Lato", "sans-serif"),
        Font::new("Pacifico", "cursive"),
        Font::new("Roboto Mono", "monospace"),
        Font::new("Bebas Neue", "display"),
    ];

    for font in &fonts {
        for category in Category::builtin() {
            if matches!(category, Category::All | Category::Caps) {
                continue;
            }
            assert_eq!(
                classify(font, &category),
                font.category == category.as_str(),
                "{} vs {category}",
                font.name
            );
        }
        assert!(classify(font, &Category::All));
    }
}

#[test]
fn extended_rule_table_applies_without_code_changes() {
    let rule = CapsRule::default()
        .with_explicit(["Cinzel"])
        .with_exceptions(["Amatic SC"]);
    let cinzel = Font::new("Cinzel", "serif");
    let amatic = Font::new("Amatic SC", "cursive");

    assert!(classify_with(&rule, &cinzel, &Category::Caps));
    assert!(!classify(&cinzel, &Category::Caps));
    // explicit membership still wins over the new exception
    assert!(classify_with(&rule, &amatic, &Category::Caps));
}
