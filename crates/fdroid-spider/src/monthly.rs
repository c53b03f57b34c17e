use crate::config::Config;
use crate::fs::download_file;
use crate::http::HttpClient;
use crate::manifest::{fetch_index, filter_month};
use crate::origin::{Feed, Origin};
use crate::tally::Tally;
use crate::tui::progress_bar;
use std::time::Instant;
use tracing::{error, info, warn};

/// Download every `feed` file dated `year`-`month`, origin by origin.
///
/// An origin whose index cannot be fetched is logged and passed over; the
/// remaining origins are still processed. Returns the totals of the run.
pub async fn download_month(
    http_client: &HttpClient,
    config: &Config,
    feed: Feed,
    year: i32,
    month: u32,
    tui: bool,
) -> Tally {
    let time = Instant::now();
    let mut total = Tally::default();

    for origin in feed.origins(config) {
        banner(&format!("processing {}", origin.name));

        if let Some(tally) = download_origin_month(http_client, &origin, year, month, tui).await {
            total += tally;
        }
    }

    banner("OVERALL SUMMARY");
    info!("✓ {} files downloaded successfully across all servers", total.successful());
    if total.failed > 0 {
        warn!("✗ {} files failed to download", total.failed);
    }
    info!("{feed} {year}-{month:02} finished, {}", crate::time_elapsed(time));

    total
}

/// Month run for a single origin; `None` if its index could not be read.
async fn download_origin_month(
    http_client: &HttpClient,
    origin: &Origin,
    year: i32,
    month: u32,
    tui: bool,
) -> Option<Tally> {
    let index = match fetch_index(http_client, origin).await {
        Ok(index) => index,
        Err(err) => {
            error!("failed to process {}, error({err})", origin.name);
            return None;
        }
    };

    let month_files = filter_month(&index, year, month);
    if month_files.is_empty() {
        info!("no files found for {} in {year}-{month:02}", origin.name);
        return Some(Tally::default());
    }

    info!("downloading {} files for {} ...", month_files.len(), origin.name);
    let pb = progress_bar(month_files.len(), origin.name.clone(), tui);
    let mut tally = Tally::default();
    for filename in &month_files {
        tally.record(download_file(http_client, origin, filename).await);
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!("{} download complete:", origin.name);
    info!("✓ {} files downloaded successfully", tally.successful());
    if tally.failed > 0 {
        warn!("✗ {} files failed to download", tally.failed);
    }

    Some(tally)
}

pub(crate) fn banner(name: &str) {
    let bar = "=".repeat(50);
    info!("{bar}");
    info!("{name}");
    info!("{bar}");
}
