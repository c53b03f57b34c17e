use crate::config::Config;
use std::fmt;
use std::path::PathBuf;

/// The F-Droid mirrors publishing app download metrics.
pub const SERVERS: [&str; 4] = [
    "http01.fdroid.net",
    "http02.fdroid.net",
    "http03.fdroid.net",
    "originserver.f-droid.org",
];

/// The single host publishing search metrics.
pub const SEARCH_HOST: &str = "search.f-droid.org";

/// A family of metrics files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feed {
    /// App download metrics, one origin per server in [`SERVERS`].
    Apps,

    /// Search metrics from [`SEARCH_HOST`].
    Search,
}

impl Feed {
    /// Subdirectory of the data root the feed is written to.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Feed::Apps => "apps",
            Feed::Search => "search",
        }
    }

    /// Every origin of the feed, in processing order.
    pub fn origins(&self, config: &Config) -> Vec<Origin> {
        let root = config.data_dir.join(self.dir_name());
        match self {
            Feed::Apps => SERVERS
                .iter()
                .map(|server| Origin {
                    name: server.to_string(),
                    url: format!("{}/{server}", config.base_url),
                    dir: root.join(server),
                })
                .collect(),
            Feed::Search => vec![Origin {
                name: SEARCH_HOST.to_string(),
                url: format!("{}/{SEARCH_HOST}", config.base_url),
                dir: root,
            }],
        }
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// One remote directory of metrics files, and where it is mirrored locally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Origin {
    pub name: String,
    pub url: String,
    pub dir: PathBuf,
}

impl Origin {
    pub fn index_url(&self) -> String {
        self.file_url("index.json")
    }

    pub fn file_url(&self, filename: &str) -> String {
        format!("{}/{filename}", self.url)
    }

    /// Local path `filename` is saved to.
    pub fn target(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }
}
