//! votegrep — extract candidate vote totals from an election results
//! page into a JSON report.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "votegrep",
    version,
    about = "Extract candidate vote totals from an election results page",
    after_help = "The page is scanned table-first, then as free text. Extracted \
counts are heuristic: the first number near a candidate's name wins, so add \
distinguishing text to a name if the page lists several figures side by side."
)]
struct Cli {
    /// URL of the results page (HTML)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Local HTML file path
    #[arg(long, value_name = "PATH", conflicts_with = "url")]
    file: Option<PathBuf>,

    /// Comma-separated candidate name variants to search for
    #[arg(
        long,
        value_name = "LIST",
        default_value = "Kamala Harris,Donald Trump"
    )]
    candidates: String,

    /// Write the JSON report to this path instead of stdout
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 20)]
    timeout: u64,

    /// Suppress status output on stderr
    #[arg(long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.quiet {
        std::env::set_var("VOTEGREP_QUIET", "1");
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let result = votegrep::cli::extract_cmd::run(
        cli.url.as_deref(),
        cli.file.as_deref(),
        &cli.candidates,
        cli.out.as_deref(),
        cli.timeout.saturating_mul(1_000),
    )
    .await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
