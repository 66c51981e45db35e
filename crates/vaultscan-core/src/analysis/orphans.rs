//! Orphan-note detection
//!
//! A note is an orphan when none of its outgoing references resolves to a
//! known note and nothing links to it. A dangling outgoing reference does
//! not save a note from orphan status; any incoming edge disqualifies it
//! regardless of the source note's own status.

use crate::graph::RefGraph;
use serde::Serialize;

/// Result of orphan analysis over a vault.
#[derive(Debug, Clone, Serialize)]
pub struct OrphanReport {
    pub total_notes: usize,
    pub orphan_count: usize,
    /// Orphan identifiers, sorted for stable output
    pub orphans: Vec<String>,
}

/// Find orphan notes in the graph. Pure function, no I/O.
pub fn find_orphans(graph: &RefGraph) -> OrphanReport {
    let mut orphans: Vec<String> = graph
        .universe()
        .iter()
        .filter(|id| !graph.has_known_outgoing(id) && !graph.has_incoming(id))
        .cloned()
        .collect();
    orphans.sort();

    OrphanReport {
        total_notes: graph.universe().len(),
        orphan_count: orphans.len(),
        orphans,
    }
}
