use regex::Regex;
use std::collections::BTreeSet;
use tracing::warn;

/// Extract inline `#tag` markers from note content.
///
/// A tag is `#` followed by alphanumeric/hyphen/underscore characters,
/// optionally extended with `/`-separated hierarchy segments
/// (`#project/sub-task`). A candidate is suppressed when the `#` is
/// immediately preceded by a backtick or an opening square bracket, which
/// covers inline code spans and link syntax. Fenced code blocks are not
/// treated specially.
pub fn inline_tags(content: &str) -> BTreeSet<String> {
    // The optional leading capture stands in for a lookbehind: when it
    // matches, the candidate sits inside code-span or link syntax.
    let inline_tag_re = match Regex::new(r"([`\[])?#([A-Za-z0-9_-]+(?:/[A-Za-z0-9_-]+)*)") {
        Ok(re) => re,
        Err(e) => {
            warn!(error = %e, "Failed to compile inline tag regex");
            return BTreeSet::new();
        }
    };

    inline_tag_re
        .captures_iter(content)
        .filter(|cap| cap.get(1).is_none())
        .map(|cap| cap[2].to_string())
        .collect()
}
