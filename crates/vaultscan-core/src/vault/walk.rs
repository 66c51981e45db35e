use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use crate::config::ScanConfig;

/// Enumerate note files under `root`.
///
/// A directory whose name is in the exclusion set is skipped together
/// with its entire subtree. The match is against the single component
/// name, so a note file sharing an excluded name is unaffected. The root
/// itself is never excluded. Unreadable entries are logged and skipped;
/// traversal never mutates the tree.
pub(crate) fn note_paths(root: &Path, config: &ScanConfig) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_excluded_dir(e, config));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if !entry
            .path()
            .extension()
            .is_some_and(|ext| ext == config.note_extension.as_str())
        {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_path_buf();
        paths.push(rel);
    }

    paths.sort();
    paths
}

fn is_excluded_dir(entry: &DirEntry, config: &ScanConfig) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| config.is_excluded_dir(name))
}
