//! Date format adapter.
//!
//! Users type dates as `DD-MM-YYYY` (or `DD/MM/YYYY`), the backend exchanges
//! them as `YYYY-MM-DD`. Conversion is a purely textual reordering: no
//! calendar validation is done, so `45-13-2022` passes through as `2022-13-45`.
//! Input that does not split into exactly three parts is returned unchanged.

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})").expect("valid date prefix regex"));

/// `13-02-2022` / `13/02/2022` → `2022-02-13`
pub fn to_exchange_format(display: &str) -> String {
    let parts: Vec<&str> = display.split(['-', '/']).collect();
    match parts.as_slice() {
        [day, month, year] => format!("{year}-{month}-{day}"),
        _ => display.to_string(),
    }
}

/// `2022-02-13` → `13-02-2022`
pub fn to_display_format(exchange: &str) -> String {
    let parts: Vec<&str> = exchange.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => format!("{day}-{month}-{year}"),
        _ => exchange.to_string(),
    }
}

/// Reduce a backend timestamp (`2022-02-13T00:00:00.000Z`) to its calendar
/// date (`2022-02-13`). Anything unrecognised is returned as-is.
pub fn date_portion(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.date_naive().format("%Y-%m-%d").to_string();
    }

    if NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok() {
        return raw.to_string();
    }

    match DATE_PREFIX.captures(raw) {
        Some(caps) => caps[1].to_string(),
        None => raw.to_string(),
    }
}

/// Backend value → what the user sees and edits.
pub fn backend_to_display(raw: &str) -> String {
    to_display_format(&date_portion(raw))
}
