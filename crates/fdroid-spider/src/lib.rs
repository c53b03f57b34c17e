pub mod config;
pub mod error;
pub mod fs;
pub mod origin;

/// Per-origin `index.json` manifests, and the month filter applied to them.
pub mod manifest;

/// The monthly fetch-filter-save run over every origin of a feed.
pub mod monthly;

/// Day-by-day downloads over an inclusive date range.
pub mod range;

/// Local vs. remote date coverage.
pub mod availability;

pub mod tally;

pub(crate) mod http;
pub(crate) mod tui;

pub use config::Config;
pub use error::{Result, SpiderError};
pub use fs::Outcome;
pub use origin::{Feed, Origin};
pub use tally::Tally;

pub use http::HttpClient;

/// Build the [`reqwest`] client shared by every spider process.
pub fn build_client(config: &Config) -> Result<HttpClient> {
    reqwest::ClientBuilder::new()
        .user_agent(&config.user_agent)
        .build()
        .map_err(SpiderError::Client)
}

pub(crate) fn time_elapsed(time: std::time::Instant) -> String {
    format!("time elapsed: {:?}", time.elapsed())
}
