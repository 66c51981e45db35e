use regex::Regex;
use std::collections::BTreeSet;
use tracing::warn;

/// A wiki-link target as written in a note body.
///
/// Keeps both the raw (possibly folder-qualified) form and the resolved
/// stem. Two notes sharing a stem in different folders collapse to the
/// same identifier after resolution; callers that care can still inspect
/// the raw form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinkTarget {
    raw: String,
    stem: String,
}

impl LinkTarget {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let stem = match raw.rsplit_once('/') {
            Some((_, last)) => last.to_string(),
            None => raw.clone(),
        };
        LinkTarget { raw, stem }
    }

    /// The target text exactly as written between the brackets
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The resolved note identifier: the final path segment when the
    /// target is folder-qualified, the raw text otherwise
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Whether the target carried a folder qualifier
    pub fn is_qualified(&self) -> bool {
        self.raw.contains('/')
    }
}

/// Extract wiki-link targets from note content.
///
/// Matches `[[target]]` and `[[target|alias]]` anywhere in the text; code
/// fences are not excluded. Duplicate targets collapse into one entry.
pub fn extract_links(content: &str) -> BTreeSet<LinkTarget> {
    let wiki_link_re = match Regex::new(r"\[\[([^\]|]+)(?:\|[^\]]+)?\]\]") {
        Ok(re) => re,
        Err(e) => {
            warn!(error = %e, "Failed to compile wiki link regex");
            return BTreeSet::new();
        }
    };

    wiki_link_re
        .captures_iter(content)
        .filter_map(|cap| {
            let target = cap[1].trim();
            if target.is_empty() {
                return None;
            }
            // A trailing separator leaves no final segment to resolve
            let target = LinkTarget::new(target);
            if target.stem().is_empty() {
                None
            } else {
                Some(target)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stems(content: &str) -> Vec<String> {
        extract_links(content)
            .iter()
            .map(|t| t.stem().to_string())
            .collect()
    }

    #[test]
    fn test_simple_link() {
        assert_eq!(stems("see [[Other Note]]"), vec!["Other Note"]);
    }

    #[test]
    fn test_alias_is_ignored() {
        assert_eq!(stems("[[Target|display text]]"), vec!["Target"]);
    }

    #[test]
    fn test_qualified_target_resolves_to_stem() {
        let links = extract_links("[[folder/sub/Note]]");
        let target = links.iter().next().unwrap();
        assert_eq!(target.stem(), "Note");
        assert_eq!(target.raw(), "folder/sub/Note");
        assert!(target.is_qualified());
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(stems("[[A]] and [[A]] again, plus [[A|alias]]"), vec!["A"]);
    }

    #[test]
    fn test_empty_target_skipped() {
        assert!(stems("[[ ]] nothing here").is_empty());
    }

    #[test]
    fn test_links_inside_code_fence_are_counted() {
        let content = "```\n[[Fenced]]\n```";
        assert_eq!(stems(content), vec!["Fenced"]);
    }

    #[test]
    fn test_multiple_links() {
        assert_eq!(stems("[[B]] then [[A]]"), vec!["A", "B"]);
    }

    #[test]
    fn test_unclosed_brackets_ignored() {
        assert!(stems("[[never closed").is_empty());
    }

    #[test]
    fn test_trailing_separator_skipped() {
        assert!(stems("[[folder/]]").is_empty());
    }
}
