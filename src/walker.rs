//! Filesystem walker collecting the pages to process

use crate::error::InjectError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// A page found under the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlFile {
    /// Full path (root joined with `relative`)
    pub path: PathBuf,
    /// Path relative to the root
    pub relative: PathBuf,
    /// Directories between the root and the file; 0 for files directly in the root
    pub depth: usize,
}

impl HtmlFile {
    /// File name for status lines, falling back to the relative path
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.relative.display().to_string())
    }
}

/// Walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false)
    pub follow_symlinks: bool,
    /// Extension to match, without the dot; compared case-sensitively
    pub extension: String,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            extension: "html".to_string(),
        }
    }
}

/// Recursive walker over a root directory
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Collect all matching files, sorted by path.
    ///
    /// Failing to list the root itself is fatal. Deeper entries that cannot be
    /// enumerated are logged and skipped; they never make it into the result and so
    /// are not counted.
    ///
    /// Symlinked directories are not descended into, but a symlink whose name matches
    /// is kept when it points at a regular file. A dangling link is kept too, so it
    /// surfaces as a read failure instead of vanishing.
    pub fn walk(&self) -> Result<Vec<HtmlFile>, InjectError> {
        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name();

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(InjectError::RootUnreadable {
                        path: self.root.clone(),
                        source: std::io::Error::from(e),
                    });
                }
                Err(e) => {
                    warn!(
                        path = ?e.path(),
                        error = %e,
                        "Skipping entry that could not be enumerated"
                    );
                    continue;
                }
            };

            if !self.matches_extension(entry.path()) || !is_page_entry(&entry) {
                continue;
            }

            let path = entry.path().to_path_buf();
            let relative = match path.strip_prefix(&self.root) {
                Ok(rel) => rel.to_path_buf(),
                Err(_) => continue,
            };
            let depth = relative.components().count().saturating_sub(1);

            files.push(HtmlFile {
                path,
                relative,
                depth,
            });
        }

        files.sort_by(|a, b| a.relative.cmp(&b.relative));
        Ok(files)
    }

    /// Suffix match on the file name, so a file called exactly `.html` counts too
    fn matches_extension(&self, path: &Path) -> bool {
        let suffix = format!(".{}", self.config.extension);
        path.file_name()
            .map(|name| name.to_string_lossy().ends_with(&suffix))
            .unwrap_or(false)
    }
}

fn is_page_entry(entry: &DirEntry) -> bool {
    if entry.file_type().is_file() {
        return true;
    }
    if !entry.path_is_symlink() {
        return false;
    }
    match fs::metadata(entry.path()) {
        Ok(metadata) => metadata.is_file(),
        Err(e) => {
            debug!(path = %entry.path().display(), error = %e, "Keeping dangling symlink");
            true
        }
    }
}
