mod cli;
mod spider;

// remote imports
use clap::Parser;
use cli::{Cli, TraceLevel};
use tracing::{subscriber, trace, Level};
use tracing_subscriber::FmtSubscriber;

////////////////////////////////////////////////////////////////////////////

// open the .env file, and install the `LEVEL: message` subscriber
fn preprocess(trace_level: Level) -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let my_subscriber = FmtSubscriber::builder()
        .with_max_level(trace_level)
        .with_target(false)
        .without_time()
        .finish();
    subscriber::set_global_default(my_subscriber)?;
    Ok(())
}

fn trace_level(cli: &Cli) -> Level {
    match cli.trace {
        Some(TraceLevel::DEBUG) => Level::DEBUG,
        Some(TraceLevel::ERROR) => Level::ERROR,
        Some(TraceLevel::INFO) => Level::INFO,
        Some(TraceLevel::TRACE) => Level::TRACE,
        Some(TraceLevel::WARN) => Level::WARN,
        None if cli.verbose => Level::DEBUG,
        None => Level::INFO,
    }
}

////////////////////////////////////////////////////////////////////////////

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    preprocess(trace_level(&cli))?;
    trace!("command line input recorded: {cli:?}");

    spider::run(cli).await
}
