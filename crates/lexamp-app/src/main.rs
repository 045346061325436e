use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use lexamp_config::Config;
use lexamp_export::RESULTS_FILE;
use lexamp_oxford::OxfordClient;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

mod report;
mod session;

#[cfg(test)]
mod tests;

use self::session::run_session;

/// Interactive dictionary lookup with optional spreadsheet export.
///
/// Credentials for the Oxford Dictionaries API are read from the `APP_ID`
/// and `APP_KEY` environment variables (a `.env` file is honored).
#[derive(Parser, Debug)]
#[command(name = "lexamp-app")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose diagnostics on stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::from_env();
    let client = OxfordClient::new(&config);

    let mut input = BufReader::new(tokio::io::stdin());
    let mut output = io::stdout();

    writeln!(output, "Welcome to the Lexical Amplifier!")?;
    run_session(&client, &mut input, &mut output, Path::new(RESULTS_FILE)).await?;

    Ok(())
}

/// Diagnostics go to stderr so the interactive transcript on stdout stays
/// clean.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();
}
