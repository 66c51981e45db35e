//! Note model and per-note extraction
//!
//! A note is one markdown file under the vault root, identified by its
//! file stem. Extraction is a pure function over the raw text: it pulls
//! outgoing wiki-link targets and the union of front-matter and inline
//! tags.

mod frontmatter;
mod links;
mod tags;

pub use frontmatter::{frontmatter_tags, TagsValue};
pub use links::{extract_links, LinkTarget};
pub use tags::inline_tags;

use std::collections::BTreeSet;
use std::path::PathBuf;

/// A single note discovered under the vault root.
#[derive(Debug, Clone)]
pub struct Note {
    /// Filename without extension; the unit of cross-reference
    pub id: String,
    /// Path relative to the vault root, used for traversal only
    pub path: PathBuf,
    /// Raw text (empty when the file could not be decoded)
    pub content: String,
}

/// Extraction result for one note.
#[derive(Debug, Clone, Default)]
pub struct ParsedNote {
    /// Outgoing wiki-link targets, deduplicated
    pub links: BTreeSet<LinkTarget>,
    /// Tags from front matter and inline markers, normalized
    pub tags: BTreeSet<String>,
}

impl Note {
    /// Extract links and tags from the note's content
    pub fn parse(&self) -> ParsedNote {
        let links = extract_links(&self.content);

        let mut raw_tags = frontmatter_tags(&self.content);
        raw_tags.extend(inline_tags(&self.content));

        // Normalize: strip any leading '#' markers, drop empties
        let tags = raw_tags
            .into_iter()
            .map(|t| t.trim_start_matches('#').to_string())
            .filter(|t| !t.is_empty())
            .collect();

        ParsedNote { links, tags }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(content: &str) -> Note {
        Note {
            id: "test".to_string(),
            path: PathBuf::from("test.md"),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_parse_merges_tag_sources() {
        let parsed = note("---\ntags: [a, b]\n---\n\nBody with #c inline.").parse();
        let tags: Vec<_> = parsed.tags.iter().map(String::as_str).collect();
        assert_eq!(tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_strips_leading_hash() {
        let parsed = note("---\ntags:\n  - \"#projects\"\n---\n").parse();
        assert!(parsed.tags.contains("projects"));
        assert!(!parsed.tags.contains("#projects"));
    }

    #[test]
    fn test_parse_discards_empty_tags() {
        let parsed = note("---\ntags: [\"#\", real]\n---\n").parse();
        let tags: Vec<_> = parsed.tags.iter().map(String::as_str).collect();
        assert_eq!(tags, vec!["real"]);
    }

    #[test]
    fn test_parse_empty_content() {
        let parsed = note("").parse();
        assert!(parsed.links.is_empty());
        assert!(parsed.tags.is_empty());
    }

    #[test]
    fn test_parse_links_and_tags_independent() {
        let parsed = note("see [[Other Note]] and #topic").parse();
        assert_eq!(parsed.links.len(), 1);
        assert!(parsed.tags.contains("topic"));
    }
}
