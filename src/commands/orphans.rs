//! `vaultscan orphans` command - find unlinked notes
//!
//! Scans the vault, builds the reference graph, and reports every note
//! with no qualifying incoming or outgoing link. Output is sorted and
//! deterministic for an unchanged vault.

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use vaultscan_core::analysis::orphans::find_orphans;
use vaultscan_core::error::Result;
use vaultscan_core::graph::GraphBuilder;

/// Execute the orphans command
pub fn execute(cli: &Cli) -> Result<()> {
    let start = Instant::now();

    let vault = super::open_vault(cli)?;
    let notes = vault.scan();

    let mut builder = GraphBuilder::new();
    for note in &notes {
        builder.add_note(&note.id);
        let parsed = note.parse();
        builder.add_links(&note.id, &parsed.links);
    }
    let graph = builder.build();
    let report = find_orphans(&graph);

    tracing::debug!(
        elapsed = ?start.elapsed(),
        notes = report.total_notes,
        orphans = report.orphan_count,
        "orphan_analysis"
    );

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            println!("Total notes: {}", report.total_notes);
            println!("Orphan notes: {}", report.orphan_count);
            println!();

            if report.orphans.is_empty() {
                println!("No orphan notes found!");
            } else {
                println!("Orphan notes (no incoming or outgoing links):");
                for orphan in &report.orphans {
                    println!("  - {}", orphan);
                }
            }
        }
    }

    Ok(())
}
