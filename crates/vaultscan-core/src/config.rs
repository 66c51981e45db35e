//! Scan configuration for vault traversal
//!
//! Every traversal takes an explicit [`ScanConfig`]; there is no implicit
//! module-level state. The default exclusion set covers the editor and
//! tooling folders that live inside a typical vault.

use std::collections::HashSet;

/// Directory names pruned (with their entire subtree) from every scan
/// unless overridden.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".obsidian", ".git", ".claude", "node_modules"];

/// File extension recognized as a note.
pub const NOTE_EXTENSION: &str = "md";

/// Configuration for a single vault scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory names to skip. Matched against single path components,
    /// never against path prefixes or leaf filenames.
    pub excluded_dirs: HashSet<String>,
    /// Extension a file must carry to be treated as a note.
    pub note_extension: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            excluded_dirs: DEFAULT_EXCLUDED_DIRS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            note_extension: NOTE_EXTENSION.to_string(),
        }
    }
}

impl ScanConfig {
    /// Extend the exclusion set with additional directory names
    pub fn with_extra_exclusions(
        mut self,
        extra: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.excluded_dirs.extend(extra.into_iter().map(Into::into));
        self
    }

    /// Check whether a directory name is excluded
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_exclusions() {
        let config = ScanConfig::default();
        assert!(config.is_excluded_dir(".git"));
        assert!(config.is_excluded_dir(".obsidian"));
        assert!(config.is_excluded_dir("node_modules"));
        assert!(!config.is_excluded_dir("notes"));
    }

    #[test]
    fn test_extra_exclusions() {
        let config = ScanConfig::default().with_extra_exclusions(["archive", "99 - Meta"]);
        assert!(config.is_excluded_dir("archive"));
        assert!(config.is_excluded_dir("99 - Meta"));
        assert!(config.is_excluded_dir(".git"));
    }
}
