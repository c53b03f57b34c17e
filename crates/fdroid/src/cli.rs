use chrono::{Datelike, Local};
use clap::{Args, Parser, Subcommand, ValueEnum};
use fdroid_spider::Feed;
use std::path::PathBuf;

/// Download F-Droid metrics data for a specific month from the HTTP servers.
///
/// Without a subcommand, app metrics are downloaded (same as `fdroid apps`).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub month: MonthArgs,

    /// Enable verbose (DEBUG) logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Sets the level of tracing; overrides `--verbose`.
    #[arg(short, long, global = true)]
    pub trace: Option<TraceLevel>,

    /// Draw progress bars while downloading.
    #[arg(short, long, global = true)]
    pub progress: bool,

    /// Local data root; overrides METRICS_DATA_DIR.
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download app metrics from every F-Droid server.
    Apps(MonthArgs),

    /// Download search metrics from search.f-droid.org.
    Search(MonthArgs),

    /// Download every day of an inclusive date range (at most two years).
    Range {
        source: Source,

        /// First day, YYYY-MM-DD.
        start: String,

        /// Last day, YYYY-MM-DD.
        end: String,
    },

    /// Compare local files with what the servers publish.
    Status {
        source: Source,

        /// With `--to`, also list the days of this range missing locally.
        #[arg(long, requires = "to")]
        from: Option<String>,

        #[arg(long, requires = "from")]
        to: Option<String>,
    },
}

#[derive(Args, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MonthArgs {
    /// Year to download data for [default: current year]
    pub year: Option<i32>,

    /// Month to download data for (1-12) [default: current month]
    #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,
}

impl MonthArgs {
    /// Fill unset fields from `outer`, the year/month given before a subcommand.
    pub fn or(self, outer: MonthArgs) -> MonthArgs {
        MonthArgs {
            year: self.year.or(outer.year),
            month: self.month.or(outer.month),
        }
    }

    /// `(year, month)`, each defaulting to today's.
    pub fn resolve(&self) -> (i32, u32) {
        let today = Local::now().date_naive();
        (
            self.year.unwrap_or_else(|| today.year()),
            self.month.unwrap_or_else(|| today.month()),
        )
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
#[clap(rename_all = "UPPERCASE")]
pub enum TraceLevel {
    DEBUG,
    ERROR,
    INFO,
    TRACE,
    WARN,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// App download metrics.
    Apps,

    /// Search metrics.
    Search,
}

impl From<Source> for Feed {
    fn from(source: Source) -> Self {
        match source {
            Source::Apps => Feed::Apps,
            Source::Search => Feed::Search,
        }
    }
}
