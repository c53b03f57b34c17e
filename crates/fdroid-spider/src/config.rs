use dotenv::var;
use std::path::PathBuf;

/// Root of the published F-Droid metrics.
pub const DEFAULT_BASE_URL: &str = "https://fdroid.gitlab.io/metrics";

/// Local root the `apps/` and `search/` trees are written under.
pub const DEFAULT_DATA_DIR: &str = "./raw";

/// Runtime settings, read from the environment (and a `.env` file, if the
/// binary loaded one).
///
/// | variable           | default                               |
/// |--------------------|---------------------------------------|
/// | `METRICS_BASE_URL` | `https://fdroid.gitlab.io/metrics`    |
/// | `METRICS_DATA_DIR` | `./raw`                               |
/// | `USER_AGENT`       | `fdroid-spider/<version>`             |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub data_dir: PathBuf,
    pub user_agent: String,
}

impl Config {
    pub fn new(base_url: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        Config {
            base_url: trim_base_url(base_url.into()),
            data_dir: data_dir.into(),
            user_agent: default_user_agent(),
        }
    }

    pub fn from_env() -> Self {
        let base_url = var("METRICS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let data_dir = var("METRICS_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());

        let mut config = Config::new(base_url, data_dir);
        if let Ok(user_agent) = var("USER_AGENT") {
            config.user_agent = user_agent;
        }
        config
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_BASE_URL, DEFAULT_DATA_DIR)
    }
}

fn default_user_agent() -> String {
    format!("fdroid-spider/{}", env!("CARGO_PKG_VERSION"))
}

fn trim_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
