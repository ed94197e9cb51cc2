//! DocSage: offline document analysis from the command line.

use tracing::debug;
use tracing_subscriber::EnvFilter;

use docsage_core::AnalysisConfig;

mod commands;
mod state;

use commands::Command;
use state::AppState;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays pure JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if command == Command::Help {
        println!("{}", commands::USAGE);
        return Ok(());
    }

    let config = AnalysisConfig::from_env()?;
    debug!(?config, "Configuration loaded");
    let state = AppState::new(config)?;

    let output = commands::run(&state, &command)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
