//! Vault discovery and traversal
//!
//! A vault is a directory tree of markdown notes. Scanning is read-only
//! and recomputed from scratch on every run; no state survives between
//! invocations.

mod daily;
mod walk;

pub use daily::{create_daily_note, DailyNote, DEFAULT_DAILY_DIR};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::config::ScanConfig;
use crate::error::{Result, VaultError};
use crate::note::Note;

/// Handle to a vault root plus the scan configuration for it.
#[derive(Debug)]
pub struct Vault {
    root: PathBuf,
    config: ScanConfig,
}

impl Vault {
    /// Open a vault rooted at `root`
    pub fn open(root: impl Into<PathBuf>, config: ScanConfig) -> Result<Self> {
        let root = root.into();
        if !root.exists() {
            return Err(VaultError::VaultNotFound { path: root });
        }
        if !root.is_dir() {
            return Err(VaultError::NotADirectory { path: root });
        }
        Ok(Vault { root, config })
    }

    /// Get the vault root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the scan configuration
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Enumerate note files under the root, honoring the exclusion set.
    /// Paths are relative to the root and sorted for determinism.
    pub fn note_paths(&self) -> Vec<PathBuf> {
        walk::note_paths(&self.root, &self.config)
    }

    /// Discover and read every note in the vault.
    ///
    /// A file that cannot be decoded as text is logged and kept with
    /// empty content: its identifier stays in the universe even though
    /// its links and tags were never inspected.
    pub fn scan(&self) -> Vec<Note> {
        let mut notes = Vec::new();

        for rel in self.note_paths() {
            let Some(stem) = rel.file_stem() else {
                continue;
            };
            let id = stem.to_string_lossy().into_owned();

            let abs = self.root.join(&rel);
            let content = match fs::read_to_string(&abs) {
                Ok(text) => text,
                Err(e) => {
                    warn!(path = %abs.display(), error = %e, "failed to read note; treating as empty");
                    String::new()
                }
            };

            notes.push(Note {
                id,
                path: rel,
                content,
            });
        }

        notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_open_missing_root() {
        let err = Vault::open("/definitely/not/here", ScanConfig::default()).unwrap_err();
        assert!(matches!(err, VaultError::VaultNotFound { .. }));
    }

    #[test]
    fn test_open_file_as_root() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("note.md");
        fs::write(&file, "hi").unwrap();
        let err = Vault::open(&file, ScanConfig::default()).unwrap_err();
        assert!(matches!(err, VaultError::NotADirectory { .. }));
    }

    #[test]
    fn test_scan_reads_notes() {
        let dir = tempdir().unwrap();
        write(dir.path(), "A.md", "see [[B]]");
        write(dir.path(), "sub/B.md", "nothing");

        let vault = Vault::open(dir.path(), ScanConfig::default()).unwrap();
        let notes = vault.scan();
        assert_eq!(notes.len(), 2);
        let ids: Vec<_> = notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
        assert_eq!(notes[0].content, "see [[B]]");
    }

    #[test]
    fn test_scan_keeps_undecodable_note_in_universe() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("binary.md"), [0xffu8, 0xfe, 0x00, 0x9f]).unwrap();

        let vault = Vault::open(dir.path(), ScanConfig::default()).unwrap();
        let notes = vault.scan();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, "binary");
        assert!(notes[0].content.is_empty());
    }

    #[test]
    fn test_excluded_directory_pruned() {
        let dir = tempdir().unwrap();
        write(dir.path(), "keep.md", "");
        write(dir.path(), "archive/old.md", "");
        write(dir.path(), "deep/archive/also-old.md", "");

        let config = ScanConfig::default().with_extra_exclusions(["archive"]);
        let vault = Vault::open(dir.path(), config).unwrap();
        let ids: Vec<_> = vault.scan().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["keep"]);
    }

    #[test]
    fn test_exclusion_matches_directories_not_files() {
        let dir = tempdir().unwrap();
        write(dir.path(), "archive.md", "a note named like the folder");
        write(dir.path(), "archive/old.md", "");

        let config = ScanConfig::default().with_extra_exclusions(["archive"]);
        let vault = Vault::open(dir.path(), config).unwrap();
        let ids: Vec<_> = vault.scan().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["archive"]);
    }

    #[test]
    fn test_default_exclusions_apply() {
        let dir = tempdir().unwrap();
        write(dir.path(), "note.md", "");
        write(dir.path(), ".obsidian/workspace.md", "");
        write(dir.path(), ".git/config.md", "");

        let vault = Vault::open(dir.path(), ScanConfig::default()).unwrap();
        let ids: Vec<_> = vault.scan().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["note"]);
    }

    #[test]
    fn test_non_note_extensions_ignored() {
        let dir = tempdir().unwrap();
        write(dir.path(), "note.md", "");
        write(dir.path(), "image.png", "");
        write(dir.path(), "doc.txt", "");

        let vault = Vault::open(dir.path(), ScanConfig::default()).unwrap();
        assert_eq!(vault.note_paths().len(), 1);
    }
}
