use super::*;
use clap::CommandFactory;
use std::io::Cursor;

fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        Font::new("Roboto", "sans-serif").with_variants(["100", "regular", "700italic"]),
        Font::new("Almendra SC", "serif"),
        Font::new("Alegreya SC", "serif").with_variants(["regular"]),
        Font::new("Georgia", "serif"),
    ])
}

#[test]
fn parses_search_args() {
    let cli = Cli::try_parse_from([
        "fontcat",
        "search",
        "Search CAPS Fonts: al",
        "--category",
        "caps",
        "--catalog",
        "/catalogs/webfonts.json",
        "--caps-exception",
        "Cinzel Decorative SC",
        "--limit",
        "5",
        "--json",
    ])
    .expect("parse cli");

    let Command::Search(args) = cli.command else {
        panic!("expected search command");
    };

    assert_eq!(args.query.as_deref(), Some("Search CAPS Fonts: al"));
    assert_eq!(Category::parse(&args.category), Category::Caps);
    assert_eq!(args.catalog.catalog, vec![PathBuf::from("/catalogs/webfonts.json")]);
    assert_eq!(args.limit, Some(5));
    assert!(args.json);

    let rule = build_caps_rule(&args.caps);
    assert!(!rule.is_caps("Cinzel Decorative SC"));
    assert!(rule.is_caps("Cinzel SC"));
    assert!(rule.is_caps("Almendra SC"));
    assert!(rule.shadowed_exceptions().is_empty());
}

#[test]
fn exceptions_on_explicit_list_are_flagged() {
    let cli = Cli::try_parse_from([
        "fontcat",
        "search",
        "--caps-exception",
        "Mate SC",
        "--caps-exception",
        "Cinzel Decorative SC",
    ])
    .expect("parse cli");

    let Command::Search(args) = cli.command else {
        panic!("expected search command");
    };

    let searcher = Searcher::new(build_caps_rule(&args.caps));
    assert_eq!(searcher.caps_rule().shadowed_exceptions(), vec!["Mate SC"]);
    assert!(searcher.caps_rule().is_caps("Mate SC"));
    assert!(!searcher.caps_rule().is_caps("Cinzel Decorative SC"));
}

#[test]
fn json_and_ndjson_conflict() {
    let parse = Cli::try_parse_from(["fontcat", "search", "--json", "--ndjson", "al"]);
    assert!(parse.is_err());
}

#[test]
fn verbose_flag_is_global() {
    let cli = Cli::try_parse_from(["fontcat", "categories", "-v"]).expect("parse cli");
    assert!(cli.verbose);
}

#[test]
fn explicit_catalog_paths_override_env() {
    let explicit = vec![PathBuf::from("/a.json")];
    let paths = catalog_paths(&explicit, Some("/b.json:/c.json".to_string()));
    assert_eq!(paths, explicit);
}

#[test]
fn env_catalog_paths_split_on_separators() {
    let paths = catalog_paths(&[], Some("/b.json:/c ; ;/d.json".to_string()));
    assert_eq!(
        paths,
        vec![
            PathBuf::from("/b.json"),
            PathBuf::from("/c"),
            PathBuf::from("/d.json")
        ]
    );
    assert!(catalog_paths(&[], None).is_empty());
}

#[test]
fn writes_plain_names() {
    let catalog = sample_catalog();
    let found = catalog.search(&Category::Serif, "al");

    let mut buf = Cursor::new(Vec::new());
    write_plain(&found, &mut buf, false).expect("write");

    let output = String::from_utf8(buf.into_inner()).expect("utf8");
    assert_eq!(output, "Alegreya SC\nAlmendra SC\n");
}

#[test]
fn columns_align_categories() {
    let catalog = sample_catalog();
    let found: Vec<&Font> = catalog.iter().take(2).collect();

    let mut buf = Cursor::new(Vec::new());
    write_columns(&found, &mut buf, false).expect("write");

    let output = String::from_utf8(buf.into_inner()).expect("utf8");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0].find("sans-serif").expect("category"),
        lines[1].find("serif").expect("category")
    );
    assert!(lines[0].contains("weights:100,400,700 italic"));
    assert!(lines[1].contains("weights:-"));
}

#[test]
fn color_choice_is_applied() {
    let catalog = sample_catalog();
    let found: Vec<&Font> = catalog.iter().collect();

    let mut buf = Cursor::new(Vec::new());
    write_plain(&found, &mut buf, true).expect("write");

    let output = String::from_utf8(buf.into_inner()).expect("utf8");
    assert!(output.contains("\u{1b}["));
}

#[test]
fn categories_list_prefixes() {
    let mut buf = Cursor::new(Vec::new());
    run_categories(&mut buf).expect("write");

    let output = String::from_utf8(buf.into_inner()).expect("utf8");
    assert_eq!(output.lines().count(), 7);
    assert!(output.contains("caps         Search CAPS Fonts: "));
}

#[test]
fn batch_writes_one_record_per_request_in_order() {
    let catalog = sample_catalog();
    let input = concat!(
        r#"{"category": "caps", "query": "Search CAPS Fonts: al"}"#,
        "\n\n",
        r#"{"query": "g"}"#,
        "\n",
        r#"{"category": "monospace"}"#,
        "\n",
    );

    let mut out = Vec::new();
    batch_io(
        &Searcher::default(),
        &catalog,
        &SearchOptions { jobs: Some(2) },
        Cursor::new(input.as_bytes()),
        &mut out,
    )
    .expect("batch");

    let text = String::from_utf8(out).expect("utf8");
    let records: Vec<BatchRecord> = text
        .lines()
        .map(|line| serde_json::from_str(line).expect("record"))
        .collect();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].category, "caps");
    assert_eq!(records[0].fonts, vec!["Alegreya SC", "Almendra SC"]);
    assert_eq!(records[1].category, "all");
    assert_eq!(records[1].fonts, vec!["Georgia", "Alegreya SC"]);
    assert_eq!(records[2].count, 0);
}

#[test]
fn batch_reports_bad_line_number() {
    let catalog = sample_catalog();
    let err = batch_io(
        &Searcher::default(),
        &catalog,
        &SearchOptions::default(),
        Cursor::new(b"{\"query\": \"a\"}\nnot json\n".to_vec()),
        Vec::new(),
    )
    .unwrap_err();

    assert!(err.to_string().contains("line 2"), "{err}");
}

#[test]
fn help_output_includes_search_flags() {
    let mut root = Cli::command();
    let search = root
        .find_subcommand_mut("search")
        .expect("search command present");
    let help = search.render_long_help().to_string();
    assert!(help.contains("--category"));
    assert!(help.contains("--caps-exception"));
    assert!(help.contains("--color <COLOR>"));
}
