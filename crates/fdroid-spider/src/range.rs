use crate::config::Config;
use crate::error::{Result, SpiderError};
use crate::fs::download_file;
use crate::http::HttpClient;
use crate::manifest::DATE_FORMAT;
use crate::monthly::banner;
use crate::origin::Feed;
use crate::tally::Tally;
use crate::tui::progress_bar;
use chrono::NaiveDate;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Longest range accepted by [`dates_between`], in days.
pub const MAX_RANGE_DAYS: i64 = 366 * 2;

pub fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|_| SpiderError::Date(date.to_string()))
}

/// Every day of `start..=end`.
pub fn dates_between(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
    if start > end {
        return Err(SpiderError::Range(format!(
            "start date {start} is after end date {end}"
        )));
    }

    let days = (end - start).num_days();
    if days > MAX_RANGE_DAYS {
        return Err(SpiderError::Range(format!(
            "{days} days requested, at most {MAX_RANGE_DAYS} allowed"
        )));
    }

    Ok(start.iter_days().take(days as usize + 1).collect())
}

/// Download `<date>.json` from every origin of `feed`, for every date of
/// `start..=end`.
///
/// No index is consulted: dates an origin never published simply fail and
/// are counted as such.
pub async fn download_range(
    http_client: &HttpClient,
    config: &Config,
    feed: Feed,
    start: NaiveDate,
    end: NaiveDate,
    tui: bool,
) -> Result<Tally> {
    let dates = dates_between(start, end)?;
    let origins = feed.origins(config);
    let time = Instant::now();

    info!(
        "fetching {feed} data for {} days ({start} to {end}) from {} origins",
        dates.len(),
        origins.len()
    );
    let pb = progress_bar(dates.len() * origins.len(), format!("{feed} {start}..{end}"), tui);

    let mut tally = Tally::default();
    for date in &dates {
        let filename = format!("{}.json", date.format(DATE_FORMAT));
        for origin in &origins {
            debug!("fetching {feed} data for {} on {date} ...", origin.name);
            tally.record(download_file(http_client, origin, &filename).await);
            pb.inc(1);
        }
    }
    pb.finish_and_clear();

    banner("RANGE SUMMARY");
    info!(
        "✓ {} files downloaded, {} already present",
        tally.downloaded, tally.skipped
    );
    if tally.failed > 0 {
        warn!("✗ {} files failed to download", tally.failed);
    }
    info!("{}", crate::time_elapsed(time));

    Ok(tally)
}
