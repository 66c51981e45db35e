//! `vaultscan daily` command - create a dated note

use crate::cli::{Cli, OutputFormat};
use vaultscan_core::error::Result;
use vaultscan_core::vault::create_daily_note;

/// Execute the daily command
pub fn execute(cli: &Cli, date: Option<&str>, dir: &str) -> Result<()> {
    let vault = super::open_vault(cli)?;
    let note = create_daily_note(vault.root(), dir, date)?;

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "path": note.path.display().to_string(),
                    "created": note.created,
                })
            );
        }
        OutputFormat::Human => {
            if note.created {
                println!("Created daily note: {}", note.path.display());
            } else {
                println!("Daily note already exists: {}", note.path.display());
            }
        }
    }

    Ok(())
}
