//! Criterion benchmark for the catalog search pipeline (made by FontLab https://www.fontlab.com/)

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fontcat_core::category::Category;
use fontcat_core::font::Font;
use fontcat_core::query::Query;
use fontcat_core::search::{search, search_batch, SearchOptions};

fn synthetic_catalog(size: usize) -> Vec<Font> {
    const STEMS: &[&str] = &["Alegreya", "Garamond", "Roboto", "Lora", "Amatic", "Noto Sans"];
    const CATEGORIES: &[&str] = &["serif", "sans-serif", "display", "cursive", "monospace"];

    (0..size)
        .map(|i| {
            let stem = STEMS[i % STEMS.len()];
            let name = if i % 7 == 0 {
                format!("{stem} {i} SC")
            } else {
                format!("{stem} {i}")
            };
            Font::new(name, CATEGORIES[i % CATEGORIES.len()])
        })
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let catalog = synthetic_catalog(1_500);

    c.bench_function("search all, short term", |b| {
        b.iter(|| search(black_box(&catalog), &Category::All, black_box("al")))
    });

    c.bench_function("search caps, prefixed input", |b| {
        b.iter(|| {
            search(
                black_box(&catalog),
                &Category::Caps,
                black_box("Search CAPS Fonts: a"),
            )
        })
    });

    let queries: Vec<Query> = ["a", "ro", "sc", "gar", ""]
        .iter()
        .flat_map(|term| {
            Category::builtin()
                .into_iter()
                .map(move |category| Query::new().with_category(category).with_input(term))
        })
        .collect();

    c.bench_function("batch of 35 queries", |b| {
        b.iter(|| search_batch(black_box(&catalog), &queries, &SearchOptions::default()).unwrap())
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
