//! Streaming output helpers (made by FontLab https://www.fontlab.com/)

use std::io::Write;

use anyhow::Result;

use crate::category::Category;
use crate::font::Font;

/// Write results as prettified JSON array.
pub fn write_json_pretty(results: &[&Font], mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    w.write_all(json.as_bytes())?;
    Ok(())
}

/// Write results as newline-delimited JSON (NDJSON).
pub fn write_ndjson(results: &[&Font], mut w: impl Write) -> Result<()> {
    for item in results {
        let line = serde_json::to_string(item)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}

/// Results counter text, e.g. `12 CAPS Fonts` or `1 Font`.
pub fn results_counter(count: usize, category: &Category) -> String {
    let noun = if count == 1 { "Font" } else { "Fonts" };
    match category {
        Category::All => format!("{count} {noun}"),
        other => format!("{count} {} {noun}", other.label()),
    }
}
