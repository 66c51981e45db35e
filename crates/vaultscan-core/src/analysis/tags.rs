//! Tag aggregation and overview rendering
//!
//! Groups notes per tag, ranks tags by usage, and renders a Markdown
//! overview with a count table and detail sections for the most-used
//! tags.

use std::collections::{BTreeMap, BTreeSet};

/// How many tags get a detail section.
const DETAIL_TAG_LIMIT: usize = 20;

/// How many member notes each detail section lists.
const DETAIL_NOTE_LIMIT: usize = 10;

/// Notes grouped per tag. Built once per run and read-only afterward.
#[derive(Debug, Default)]
pub struct TagIndex {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl TagIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one note's tag set. A note listing the same tag twice is
    /// recorded once per tag.
    pub fn add_note<'a>(&mut self, id: &str, tags: impl IntoIterator<Item = &'a str>) {
        for tag in tags {
            self.entries
                .entry(tag.to_string())
                .or_default()
                .insert(id.to_string());
        }
    }

    /// Number of unique tags
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of (note, tag) membership pairs
    pub fn membership_count(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    /// Tags ranked by descending member count, ties broken by tag name
    /// ascending so output is reproducible
    pub fn ranked(&self) -> Vec<(&str, &BTreeSet<String>)> {
        let mut ranked: Vec<_> = self
            .entries
            .iter()
            .map(|(tag, notes)| (tag.as_str(), notes))
            .collect();
        ranked.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

/// Render the Markdown tag overview: summary count, full tag/count table,
/// and detail sections for the top tags.
pub fn render_overview(index: &TagIndex) -> String {
    let ranked = index.ranked();
    let mut lines = Vec::new();

    lines.push("# Tag Overview".to_string());
    lines.push(String::new());
    lines.push(format!("Total unique tags: {}", ranked.len()));
    lines.push(String::new());
    lines.push("## Tags by Usage".to_string());
    lines.push(String::new());
    lines.push("| Tag | Count |".to_string());
    lines.push("|-----|-------|".to_string());

    for (tag, notes) in &ranked {
        lines.push(format!("| #{} | {} |", tag, notes.len()));
    }

    lines.push(String::new());
    lines.push("## Tag Details".to_string());
    lines.push(String::new());

    for (tag, notes) in ranked.iter().take(DETAIL_TAG_LIMIT) {
        lines.push(format!("### #{} ({} notes)", tag, notes.len()));
        lines.push(String::new());
        for note in notes.iter().take(DETAIL_NOTE_LIMIT) {
            lines.push(format!("- [[{}]]", note));
        }
        if notes.len() > DETAIL_NOTE_LIMIT {
            lines.push(format!("- ... and {} more", notes.len() - DETAIL_NOTE_LIMIT));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
