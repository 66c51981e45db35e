//! Bidirectional reference graph over note identifiers
//!
//! Edges are keyed by resolved stem, matching how references are written
//! in practice. Dangling targets (stems with no matching note) are
//! recorded in the adjacency maps; analyses filter them against the
//! universe of known identifiers.

use crate::note::LinkTarget;
use std::collections::{HashMap, HashSet};

/// Bidirectional adjacency structure over note identifiers.
///
/// For every recorded reference `s -> t`, `t` is in `outgoing[s]` and `s`
/// is in `incoming[t]`, regardless of whether `t` names a known note.
#[derive(Debug, Default)]
pub struct RefGraph {
    outgoing: HashMap<String, HashSet<String>>,
    incoming: HashMap<String, HashSet<String>>,
    universe: HashSet<String>,
}

impl RefGraph {
    /// The set of known note identifiers
    pub fn universe(&self) -> &HashSet<String> {
        &self.universe
    }

    /// Targets referenced from `id`, including dangling ones
    pub fn outgoing(&self, id: &str) -> Option<&HashSet<String>> {
        self.outgoing.get(id)
    }

    /// Sources that reference `id`
    pub fn incoming(&self, id: &str) -> Option<&HashSet<String>> {
        self.incoming.get(id)
    }

    /// Whether any outgoing edge from `id` resolves to a known note
    pub fn has_known_outgoing(&self, id: &str) -> bool {
        self.outgoing
            .get(id)
            .is_some_and(|targets| targets.iter().any(|t| self.universe.contains(t)))
    }

    /// Whether anything links to `id`
    pub fn has_incoming(&self, id: &str) -> bool {
        self.incoming.get(id).is_some_and(|sources| !sources.is_empty())
    }
}

/// Graph builder - accumulates per-note extraction results
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: RefGraph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a note identifier as present in the vault.
    ///
    /// Must be called for every discovered note, including notes whose
    /// content could not be read; membership in the universe does not
    /// depend on successful extraction.
    pub fn add_note(&mut self, id: &str) {
        self.graph.universe.insert(id.to_string());
    }

    /// Record one note's outgoing targets.
    ///
    /// Duplicate references collapse; notes sharing an identifier merge
    /// their edge sets.
    pub fn add_links<'a>(&mut self, source: &str, targets: impl IntoIterator<Item = &'a LinkTarget>) {
        for target in targets {
            let stem = target.stem().to_string();
            self.graph
                .outgoing
                .entry(source.to_string())
                .or_default()
                .insert(stem.clone());
            self.graph
                .incoming
                .entry(stem)
                .or_default()
                .insert(source.to_string());
        }
    }

    pub fn build(self) -> RefGraph {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::extract_links;

    fn graph_from(pairs: &[(&str, &str)]) -> RefGraph {
        let mut builder = GraphBuilder::new();
        for (id, content) in pairs {
            builder.add_note(id);
            let links = extract_links(content);
            builder.add_links(id, &links);
        }
        builder.build()
    }

    #[test]
    fn test_edge_invariant() {
        let graph = graph_from(&[("A", "see [[B]]"), ("B", "nothing")]);
        assert!(graph.outgoing("A").unwrap().contains("B"));
        assert!(graph.incoming("B").unwrap().contains("A"));
    }

    #[test]
    fn test_dangling_reference_recorded() {
        let graph = graph_from(&[("A", "see [[Ghost]]")]);
        assert!(graph.outgoing("A").unwrap().contains("Ghost"));
        assert!(graph.incoming("Ghost").unwrap().contains("A"));
        assert!(!graph.universe().contains("Ghost"));
        assert!(!graph.has_known_outgoing("A"));
    }

    #[test]
    fn test_qualified_reference_keys_by_stem() {
        let graph = graph_from(&[("A", "see [[projects/B]]"), ("B", "")]);
        assert!(graph.outgoing("A").unwrap().contains("B"));
        assert!(graph.has_known_outgoing("A"));
        assert!(graph.has_incoming("B"));
    }

    #[test]
    fn test_duplicate_references_collapse() {
        let graph = graph_from(&[("A", "[[B]] [[B]] [[B|label]]"), ("B", "")]);
        assert_eq!(graph.outgoing("A").unwrap().len(), 1);
        assert_eq!(graph.incoming("B").unwrap().len(), 1);
    }

    #[test]
    fn test_unlinked_note_has_no_edges() {
        let graph = graph_from(&[("A", "plain text")]);
        assert!(graph.outgoing("A").is_none());
        assert!(!graph.has_incoming("A"));
        assert!(graph.universe().contains("A"));
    }
}
