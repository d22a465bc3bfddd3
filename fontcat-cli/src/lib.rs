//! fontcat CLI (made by FontLab https://www.fontlab.com/)

pub mod server;

use std::env;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use fontcat_core::caps::CapsRule;
use fontcat_core::catalog::Catalog;
use fontcat_core::category::Category;
use fontcat_core::font::Font;
use fontcat_core::output::{results_counter, write_json_pretty, write_ndjson};
use fontcat_core::query::Query;
use fontcat_core::search::{SearchOptions, Searcher};
use fontcat_core::similar::{similar_to, suggest};

const CATALOG_ENV: &str = "FONTCAT_CATALOG";
const DEFAULT_BIND: &str = "127.0.0.1:8765";

/// CLI entrypoint for fontcat.
#[derive(Debug, Parser)]
#[command(
    name = "fontcat",
    about = "Font catalog search and classification (made by FontLab https://www.fontlab.com/)"
)]
pub struct Cli {
    /// Emit debug logs on stderr (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Filter and rank a catalog by category and query
    Search(SearchArgs),
    /// List built-in categories with their search prefixes
    Categories,
    /// Suggest catalog stand-ins for a well-known font
    Similar(SimilarArgs),
    /// Run NDJSON queries from STDIN in parallel
    Batch(BatchArgs),
    /// Serve the search engine over HTTP
    Serve(ServeArgs),
}

#[derive(Debug, Args)]
struct CatalogArgs {
    /// Catalog JSON files or directories (defaults to $FONTCAT_CATALOG)
    #[arg(short = 'c', long = "catalog", value_hint = ValueHint::AnyPath)]
    catalog: Vec<PathBuf>,

    /// Follow symlinks while walking catalog directories
    #[arg(long = "follow-symlinks", action = ArgAction::SetTrue)]
    follow_symlinks: bool,
}

#[derive(Debug, Args)]
struct CapsArgs {
    /// Extra font names always classified as CAPS
    #[arg(long = "caps-include", value_hint = ValueHint::Other)]
    caps_include: Vec<String>,

    /// Extra font names never classified as CAPS by the SC/Caps pattern
    /// (names on the explicit CAPS list stay CAPS and are reported with a warning)
    #[arg(long = "caps-exception", value_hint = ValueHint::Other)]
    caps_exception: Vec<String>,
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Raw search box input; a `Search <Category> Fonts:` prefix is ignored
    query: Option<String>,

    /// Category to filter by (all, serif, sans-serif, display, cursive, monospace, caps)
    #[arg(short = 'k', long = "category", default_value = "all")]
    category: String,

    #[command(flatten)]
    catalog: CatalogArgs,

    #[command(flatten)]
    caps: CapsArgs,

    /// Print at most this many results
    #[arg(short = 'l', long = "limit")]
    limit: Option<usize>,

    /// Print only the results counter
    #[arg(long = "count", action = ArgAction::SetTrue)]
    count: bool,

    /// Emit a single JSON array
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "ndjson")]
    json: bool,

    /// Emit newline-delimited JSON
    #[arg(long = "ndjson", action = ArgAction::SetTrue)]
    ndjson: bool,

    /// Format output as padded columns
    #[arg(long = "columns", action = ArgAction::SetTrue)]
    columns: bool,

    /// Control colorized output (auto|always|never)
    #[arg(long = "color", default_value_t = ColorChoice::Auto, value_enum)]
    color: ColorChoice,
}

#[derive(Debug, Args)]
struct SimilarArgs {
    /// Well-known font name, e.g. Helvetica
    name: String,

    #[command(flatten)]
    catalog: CatalogArgs,
}

#[derive(Debug, Args)]
struct BatchArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    #[command(flatten)]
    caps: CapsArgs,

    /// Worker threads for the batch (defaults to all cores)
    #[arg(short = 'j', long = "jobs")]
    jobs: Option<usize>,
}

#[derive(Debug, Args)]
struct ServeArgs {
    /// Address to listen on
    #[arg(long = "bind", default_value = DEFAULT_BIND)]
    bind: String,

    #[command(flatten)]
    catalog: CatalogArgs,

    #[command(flatten)]
    caps: CapsArgs,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// One line of `fontcat batch` input.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BatchRequest {
    category: String,
    query: String,
}

/// One line of `fontcat batch` output.
#[derive(Debug, Serialize, Deserialize)]
struct BatchRecord {
    category: String,
    query: String,
    count: usize,
    fonts: Vec<String>,
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Search(args) => run_search(args),
        Command::Categories => run_categories(&mut io::stdout().lock()),
        Command::Similar(args) => run_similar(args),
        Command::Batch(args) => run_batch(args),
        Command::Serve(args) => run_serve(args),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("fontcat_core=debug,fontcat_cli=debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn run_search(args: SearchArgs) -> Result<()> {
    if args.limit == Some(0) {
        return Err(anyhow!("--limit must be at least 1 when provided"));
    }

    let catalog = load_catalog(&args.catalog)?;
    let searcher = Searcher::new(build_caps_rule(&args.caps));
    let category = Category::parse(&args.category);
    let raw = args.query.as_deref().unwrap_or("");

    let mut found = searcher.search(catalog.fonts(), &category, raw);
    let total = found.len();
    if let Some(limit) = args.limit {
        found.truncate(limit);
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let use_color = match args.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => handle.is_terminal(),
    };

    if args.count {
        writeln!(handle, "{}", results_counter(total, &category))?;
    } else if args.ndjson {
        write_ndjson(&found, &mut handle)?;
    } else if args.json {
        write_json_pretty(&found, &mut handle)?;
        writeln!(handle)?;
    } else if found.is_empty() {
        eprintln!("no fonts found");
    } else if args.columns {
        write_columns(&found, &mut handle, use_color)?;
    } else {
        write_plain(&found, &mut handle, use_color)?;
    }

    Ok(())
}

fn run_categories(mut w: impl Write) -> Result<()> {
    for category in Category::builtin() {
        writeln!(w, "{:<12} {}", category.as_str(), category.search_prefix())?;
    }
    Ok(())
}

fn run_similar(args: SimilarArgs) -> Result<()> {
    let candidates =
        similar_to(&args.name).ok_or_else(|| anyhow!("no similar fonts known for {}", args.name))?;

    let paths = catalog_paths(&args.catalog.catalog, env::var(CATALOG_ENV).ok());
    let names: Vec<String> = if paths.is_empty() {
        candidates.iter().map(|s| s.to_string()).collect()
    } else {
        let catalog = Catalog::load_paths(&paths, args.catalog.follow_symlinks)?;
        suggest(catalog.fonts(), &args.name)
            .into_iter()
            .map(|f| f.name.clone())
            .collect()
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if names.is_empty() {
        eprintln!("no similar fonts in catalog");
    }
    for name in names {
        writeln!(handle, "{name}")?;
    }
    Ok(())
}

fn run_batch(args: BatchArgs) -> Result<()> {
    if matches!(args.jobs, Some(0)) {
        return Err(anyhow!("--jobs must be at least 1 when provided"));
    }

    let catalog = load_catalog(&args.catalog)?;
    let searcher = Searcher::new(build_caps_rule(&args.caps));
    let opts = SearchOptions { jobs: args.jobs };

    let stdin = io::stdin();
    let stdout = io::stdout();
    batch_io(&searcher, &catalog, &opts, stdin.lock(), stdout.lock())
}

fn batch_io(
    searcher: &Searcher,
    catalog: &Catalog,
    opts: &SearchOptions,
    reader: impl BufRead,
    mut w: impl Write,
) -> Result<()> {
    let mut requests = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let request: BatchRequest = serde_json::from_str(&line)
            .with_context(|| format!("invalid batch request on line {}", idx + 1))?;
        requests.push(request);
    }

    let queries: Vec<Query> = requests
        .iter()
        .map(|req| Query::parse(&req.category, &req.query))
        .collect();
    debug!(queries = queries.len(), "running batch");

    let results = searcher.search_batch(catalog.fonts(), &queries, opts)?;

    for ((request, query), found) in requests.into_iter().zip(&queries).zip(results) {
        let record = BatchRecord {
            category: query.category().to_string(),
            query: request.query,
            count: found.len(),
            fonts: found.iter().map(|f| f.name.clone()).collect(),
        };
        serde_json::to_writer(&mut w, &record)?;
        w.write_all(b"\n")?;
    }
    Ok(())
}

fn run_serve(args: ServeArgs) -> Result<()> {
    let catalog = load_catalog(&args.catalog)?;
    let searcher = Searcher::new(build_caps_rule(&args.caps));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    runtime.block_on(server::serve(&args.bind, catalog, searcher))
}

fn build_caps_rule(args: &CapsArgs) -> CapsRule {
    CapsRule::default()
        .with_explicit(args.caps_include.iter().cloned())
        .with_exceptions(args.caps_exception.iter().cloned())
}

fn load_catalog(args: &CatalogArgs) -> Result<Catalog> {
    let paths = catalog_paths(&args.catalog, env::var(CATALOG_ENV).ok());
    if paths.is_empty() {
        return Err(anyhow!(
            "no catalog provided; pass --catalog or set {CATALOG_ENV}"
        ));
    }

    let catalog = Catalog::load_paths(&paths, args.follow_symlinks)?;
    debug!(fonts = catalog.len(), sources = paths.len(), "catalog ready");
    Ok(catalog)
}

/// Explicit `--catalog` paths win; otherwise split the environment value on `:`/`;`.
fn catalog_paths(explicit: &[PathBuf], from_env: Option<String>) -> Vec<PathBuf> {
    if !explicit.is_empty() {
        return explicit.to_vec();
    }

    from_env
        .map(|raw| {
            raw.split([':', ';'])
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .collect()
        })
        .unwrap_or_default()
}

fn write_plain(fonts: &[&Font], mut w: impl Write, color: bool) -> Result<()> {
    for font in fonts {
        let rendered = apply_color(&font.name, color, AnsiColor::Cyan);
        writeln!(w, "{rendered}")?;
    }
    Ok(())
}

fn write_columns(fonts: &[&Font], mut w: impl Write, color: bool) -> Result<()> {
    let rows: Vec<(String, String, String)> = fonts
        .iter()
        .map(|font| {
            let weights = font
                .weights()
                .iter()
                .map(|wt| wt.to_string())
                .collect::<Vec<_>>()
                .join(",");
            let detail = format!(
                "weights:{}{}",
                if weights.is_empty() { "-" } else { weights.as_str() },
                if font.has_italic() { " italic" } else { "" },
            );
            (font.name.clone(), font.category.clone(), detail)
        })
        .collect();

    let name_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(0).min(80);
    let category_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(0).min(24);

    for (name, category, detail) in rows {
        let padded_name = format!("{:<name_width$}", name);
        let padded_category = format!("{:<category_width$}", category);
        let rendered_name = apply_color(&padded_name, color, AnsiColor::Cyan);
        let rendered_category = apply_color(&padded_category, color, AnsiColor::Yellow);
        let rendered_detail = apply_color(&detail, color, AnsiColor::Green);

        writeln!(w, "{rendered_name}  {rendered_category}  {rendered_detail}")?;
    }

    Ok(())
}

#[derive(Copy, Clone)]
enum AnsiColor {
    Cyan,
    Yellow,
    Green,
}

fn apply_color(text: &str, color: bool, code: AnsiColor) -> String {
    if !color {
        return text.to_string();
    }

    let code_str = match code {
        AnsiColor::Cyan => "36",
        AnsiColor::Yellow => "33",
        AnsiColor::Green => "32",
    };

    format!("\u{1b}[{}m{}\u{1b}[0m", code_str, text)
}

#[cfg(test)]
mod tests;
