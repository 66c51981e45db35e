//! `vaultscan tags` command - tag usage overview
//!
//! Aggregates front-matter and inline tags across the vault and renders
//! a ranked Markdown report, printed to stdout or written to a file.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use vaultscan_core::analysis::tags::{render_overview, TagIndex};
use vaultscan_core::error::{Result, VaultError};

/// Execute the tags command
pub fn execute(cli: &Cli, output: Option<&Path>) -> Result<()> {
    let start = Instant::now();

    let vault = super::open_vault(cli)?;
    let notes = vault.scan();

    let mut index = TagIndex::new();
    for note in &notes {
        let parsed = note.parse();
        index.add_note(&note.id, parsed.tags.iter().map(String::as_str));
    }

    tracing::debug!(
        elapsed = ?start.elapsed(),
        notes = notes.len(),
        tags = index.len(),
        "tag_aggregation"
    );

    let report = match cli.format {
        OutputFormat::Json => {
            let tags: Vec<_> = index
                .ranked()
                .iter()
                .map(|(tag, members)| {
                    serde_json::json!({
                        "tag": tag,
                        "count": members.len(),
                        "notes": members,
                    })
                })
                .collect();
            serde_json::to_string_pretty(&serde_json::json!({
                "total_tags": index.len(),
                "tags": tags,
            }))?
        }
        OutputFormat::Human => render_overview(&index),
    };

    match output {
        Some(path) => {
            fs::write(path, &report)
                .map_err(|e| VaultError::io_operation("write", path.display(), e))?;
            if !cli.quiet {
                println!("Tag overview saved to: {}", path.display());
            }
        }
        None => println!("{}", report),
    }

    Ok(())
}
