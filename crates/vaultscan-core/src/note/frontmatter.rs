use serde::Deserialize;
use std::collections::BTreeSet;
use tracing::debug;

/// The `tags:` front-matter value: a single scalar or a sequence.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TagsValue {
    One(String),
    Many(Vec<String>),
}

/// The subset of front-matter fields the analysis cares about.
#[derive(Debug, Default, Deserialize)]
struct Frontmatter {
    #[serde(default)]
    tags: Option<TagsValue>,
}

/// Extract tags from a YAML front-matter block, if present.
///
/// Malformed front matter contributes no tags rather than surfacing an
/// error; one bad metadata block must not abort the scan of the rest of
/// the vault.
pub fn frontmatter_tags(content: &str) -> BTreeSet<String> {
    let Some(body) = frontmatter_body(content) else {
        return BTreeSet::new();
    };

    match serde_yaml::from_str::<Frontmatter>(body) {
        Ok(frontmatter) => match frontmatter.tags {
            Some(TagsValue::One(tag)) => BTreeSet::from([tag]),
            Some(TagsValue::Many(tags)) => tags.into_iter().collect(),
            None => BTreeSet::new(),
        },
        Err(e) => {
            debug!(error = %e, "skipping malformed front matter");
            BTreeSet::new()
        }
    }
}

/// Slice out the front-matter body between the opening `---` line at the
/// start of the text and the closing `---` line.
fn frontmatter_body(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("---")?;

    // The opening delimiter must be a line of its own
    let newline = rest.find('\n')?;
    if !rest[..newline].trim().is_empty() {
        return None;
    }

    let body = &rest[newline + 1..];
    let end = body.find("\n---")?;
    Some(&body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_tags() {
        let tags = frontmatter_tags("---\ntags:\n  - alpha\n  - beta\n---\nbody");
        let tags: Vec<_> = tags.iter().map(String::as_str).collect();
        assert_eq!(tags, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_flow_sequence_tags() {
        let tags = frontmatter_tags("---\ntags: [a, b]\n---\n");
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_scalar_tag() {
        let tags = frontmatter_tags("---\ntags: solo\n---\n");
        assert!(tags.contains("solo"));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_missing_tags_key() {
        assert!(frontmatter_tags("---\ntitle: Untagged\n---\n").is_empty());
    }

    #[test]
    fn test_null_tags_value() {
        assert!(frontmatter_tags("---\ntags:\n---\n").is_empty());
    }

    #[test]
    fn test_no_frontmatter() {
        assert!(frontmatter_tags("just a body with tags: [a]").is_empty());
    }

    #[test]
    fn test_missing_closing_delimiter() {
        assert!(frontmatter_tags("---\ntags: [a, b]\nno closing line").is_empty());
    }

    #[test]
    fn test_malformed_yaml_swallowed() {
        assert!(frontmatter_tags("---\ntags: [unclosed\n---\n").is_empty());
    }

    #[test]
    fn test_opening_delimiter_must_be_own_line() {
        assert!(frontmatter_tags("---tags: [a]\n---\n").is_empty());
    }

    #[test]
    fn test_unrelated_keys_ignored() {
        let tags = frontmatter_tags("---\ntitle: Note\ntags: [x]\nstatus: true\n---\n");
        assert!(tags.contains("x"));
    }
}
