use crate::config::Config;
use crate::error::Result;
use crate::http::HttpClient;
use crate::manifest::{fetch_index, parse_entry_date};
use crate::origin::Feed;
use crate::range::dates_between;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::io::ErrorKind;
use tracing::{debug, error, trace};

/// How many missing dates [`check`] reports.
pub const MISSING_PREVIEW: usize = 10;

/// Local and remote coverage of one feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Availability {
    pub feed: Feed,
    pub local_count: usize,
    pub remote_count: usize,
    pub local_range: Option<(NaiveDate, NaiveDate)>,
    pub remote_range: Option<(NaiveDate, NaiveDate)>,

    /// The earliest remote dates not yet on disk, at most [`MISSING_PREVIEW`].
    pub missing: Vec<NaiveDate>,
}

impl Availability {
    pub fn from_dates(feed: Feed, local: &BTreeSet<NaiveDate>, remote: &BTreeSet<NaiveDate>) -> Self {
        Availability {
            feed,
            local_count: local.len(),
            remote_count: remote.len(),
            local_range: bounds(local),
            remote_range: bounds(remote),
            missing: remote.difference(local).take(MISSING_PREVIEW).copied().collect(),
        }
    }
}

fn bounds(dates: &BTreeSet<NaiveDate>) -> Option<(NaiveDate, NaiveDate)> {
    Some((*dates.first()?, *dates.last()?))
}

/// Dates with a `<date>.json` file in any origin directory of `feed`.
pub async fn local_dates(config: &Config, feed: Feed) -> Result<BTreeSet<NaiveDate>> {
    let mut dates = BTreeSet::new();

    for origin in feed.origins(config) {
        let mut entries = match tokio::fs::read_dir(&origin.dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                trace!("{} has no local directory yet", origin.name);
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if !name.ends_with(".json") {
                continue;
            }
            if let Some(date) = parse_entry_date(name) {
                dates.insert(date);
            }
        }
    }

    debug!("{} local {feed} dates", dates.len());
    Ok(dates)
}

/// Dates published by any origin of `feed`.
///
/// An origin whose index cannot be fetched is logged and left out.
pub async fn remote_dates(http_client: &HttpClient, config: &Config, feed: Feed) -> BTreeSet<NaiveDate> {
    let mut dates = BTreeSet::new();

    for origin in feed.origins(config) {
        match fetch_index(http_client, &origin).await {
            Ok(index) => dates.extend(index.iter().filter_map(|name| parse_entry_date(name))),
            Err(err) => error!("failed to fetch index for {}, error({err})", origin.name),
        }
    }

    debug!("{} remote {feed} dates", dates.len());
    dates
}

/// Compare what is on disk with what the origins publish.
pub async fn check(http_client: &HttpClient, config: &Config, feed: Feed) -> Result<Availability> {
    let local = local_dates(config, feed).await?;
    let remote = remote_dates(http_client, config, feed).await;

    Ok(Availability::from_dates(feed, &local, &remote))
}

/// Dates of `start..=end` with no local file.
pub async fn missing_dates(config: &Config, feed: Feed, start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
    let local = local_dates(config, feed).await?;

    Ok(dates_between(start, end)?
        .into_iter()
        .filter(|date| !local.contains(date))
        .collect())
}
