use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use route_ranker::app;
use route_ranker::graph::Dimension;
use route_ranker::planner::RankConfig;
use route_ranker::report::OutputFormat;

/// Rank greedy all-station routes in a travel schedule by price and by
/// travel time.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Semicolon-delimited schedule:
    /// route;origin;destination;price;departure;arrival
    path: PathBuf,

    /// Cost dimension to rank by ("price" or "duration"). Repeat for
    /// several passes. Defaults to price, then duration.
    #[arg(long = "by", value_name = "DIMENSION")]
    dimensions: Vec<Dimension>,

    /// Show at most this many routes per dimension.
    #[arg(long)]
    limit: Option<usize>,

    /// Output format ("text" or "json").
    #[arg(long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl Args {
    fn rank_config(&self) -> RankConfig {
        let mut config = RankConfig::default();
        if !self.dimensions.is_empty() {
            config = config.with_dimensions(self.dimensions.clone());
        }
        if let Some(limit) = self.limit {
            config = config.with_max_results(limit);
        }
        config
    }
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.rank_config();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match app::run(&args.path, &config, args.format, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
