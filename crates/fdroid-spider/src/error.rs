use thiserror::Error;

/// Everything that can go wrong while collecting metrics files.
///
/// Network and parse failures of single files are logged and tallied by the
/// callers; only user input errors (dates, ranges) are expected to surface to
/// the command line.
#[derive(Debug, Error)]
pub enum SpiderError {
    #[error("failed to build HTTP client, error({0})")]
    Client(#[source] reqwest::Error),

    #[error("failed to fetch {url}, error({source})")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to parse JSON from {url}, error({source})")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid JSON, error({0})")]
    Json(#[from] serde_json::Error),

    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    Date(String),

    #[error("invalid date range: {0}")]
    Range(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SpiderError {
    /// Transport failures and non-success statuses.
    pub fn is_network(&self) -> bool {
        matches!(self, SpiderError::Network { .. } | SpiderError::Status { .. })
    }

    /// Bodies that are not the JSON we expected, and malformed dates.
    pub fn is_parse(&self) -> bool {
        matches!(self, SpiderError::Parse { .. } | SpiderError::Date(_))
    }
}

pub type Result<T> = std::result::Result<T, SpiderError>;
