use crate::cli::{Cli, Commands};
use colored::Colorize;
use fdroid_spider::availability::{self, Availability};
use fdroid_spider::{self as spider, range, Config, Feed};
use tracing::{debug, info};

/// Dispatch the parsed command line.
///
/// Monthly runs always succeed; their failures are logged and counted. Only
/// bad dates given to `range`/`status` make the process exit non-zero.
pub(crate) async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::from_env();
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }
    debug!("configuration: {config:?}");

    let http_client = spider::build_client(&config)?;
    let tui = cli.progress;
    let outer = cli.month;

    match cli.command.unwrap_or(Commands::Apps(outer)) {
        Commands::Apps(month) => {
            let (year, month) = month.or(outer).resolve();
            info!("downloading app metrics data for {year}-{month:02}");
            spider::monthly::download_month(&http_client, &config, Feed::Apps, year, month, tui).await;
        }

        Commands::Search(month) => {
            let (year, month) = month.or(outer).resolve();
            info!("downloading search metrics data for {year}-{month:02}");
            spider::monthly::download_month(&http_client, &config, Feed::Search, year, month, tui).await;
        }

        Commands::Range { source, start, end } => {
            let start = range::parse_date(&start)?;
            let end = range::parse_date(&end)?;
            range::download_range(&http_client, &config, source.into(), start, end, tui).await?;
        }

        Commands::Status { source, from, to } => {
            let feed: Feed = source.into();
            let report = availability::check(&http_client, &config, feed).await?;
            print_availability(&report);

            if let (Some(from), Some(to)) = (from, to) {
                let from = range::parse_date(&from)?;
                let to = range::parse_date(&to)?;
                let missing = availability::missing_dates(&config, feed, from, to).await?;
                println!(
                    "{} {} days missing between {from} and {to}",
                    "missing:".bold(),
                    missing.len()
                );
                for date in missing {
                    println!("  {}", date.to_string().red());
                }
            }
        }
    }

    Ok(())
}

fn print_availability(report: &Availability) {
    let span = |range: Option<(chrono::NaiveDate, chrono::NaiveDate)>| match range {
        Some((first, last)) => format!("{first} .. {last}"),
        None => "-".to_string(),
    };

    println!("{}", format!("{} metrics", report.feed).bold());
    println!(
        "  {:<8}{:>6} days  {}",
        "local",
        report.local_count.to_string().green(),
        span(report.local_range)
    );
    println!(
        "  {:<8}{:>6} days  {}",
        "remote",
        report.remote_count.to_string().cyan(),
        span(report.remote_range)
    );

    if report.missing.is_empty() {
        println!("  {}", "nothing missing".green());
    } else {
        let missing: Vec<String> = report.missing.iter().map(|date| date.to_string()).collect();
        println!("  {:<8}{}", "missing", missing.join(", ").yellow());
    }
}
