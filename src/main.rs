//! Staffbook - Main entry point
//!
//! Runs a single command line against the roster file, e.g.
//! `staffbook add /name Alex Yeo /nric S1234567A ...` or `staffbook list`.

use anyhow::Result;
use staffbook::error::StorageError;
use staffbook::{parse_command, Config, JsonRosterStorage, Roster};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only so command output stays clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using data file {}", config.data_file.display());

    let input = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let command = match parse_command(&input) {
        Ok(command) => command,
        Err(e) => {
            error!("Failed to parse command: {}", e);
            return Err(e.into());
        }
    };

    let storage = JsonRosterStorage::new(&config.data_file);
    let roster = match storage.read()? {
        Some(roster) => roster,
        None if config.create_missing => {
            info!("Starting with an empty staff book");
            Roster::new()
        }
        None => return Err(StorageError::NotFound(config.data_file.clone()).into()),
    };

    let outcome = command.execute(&roster)?;
    if let Some(updated) = &outcome.roster {
        storage.save(updated)?;
    }

    println!("{}", outcome.feedback);
    Ok(())
}
