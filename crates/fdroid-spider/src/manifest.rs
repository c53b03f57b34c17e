use crate::error::Result;
use crate::http::{get_json, HttpClient};
use crate::origin::Origin;
use chrono::{Datelike, NaiveDate};
use tracing::info;

/// Filenames are named after the day they cover, e.g. `2024-01-15.json`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fetch the list of files published by `origin`.
pub async fn fetch_index(http_client: &HttpClient, origin: &Origin) -> Result<Vec<String>> {
    info!("fetching index for {} ...", origin.name);
    let index: Vec<String> = get_json(http_client, &origin.index_url()).await?;
    info!("found {} available files for {}", index.len(), origin.name);

    Ok(index)
}

/// The day a manifest entry covers, if its name is a `YYYY-MM-DD` date with
/// an optional `.json` suffix.
///
/// Only a trailing `.json` is removed: `2024-01-01.json.json` is not a date.
pub fn parse_entry_date(filename: &str) -> Option<NaiveDate> {
    let stem = filename.strip_suffix(".json").unwrap_or(filename);
    NaiveDate::parse_from_str(stem, DATE_FORMAT).ok()
}

/// Entries of `index` dated within `year`-`month`, sorted ascending.
///
/// Entries without a parseable date (`index.json`, `last_submitted_to_cimp.json`,
/// ...) are skipped.
pub fn filter_month(index: &[String], year: i32, month: u32) -> Vec<String> {
    let mut month_files: Vec<String> = index
        .iter()
        .filter(|filename| {
            parse_entry_date(filename).is_some_and(|date| date.year() == year && date.month() == month)
        })
        .cloned()
        .collect();

    month_files.sort();
    month_files
}
