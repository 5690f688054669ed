//! Configuration System
//!
//! Everything the injector needs is carried by [`InjectorConfig`] and handed to
//! [`Injector::new`](crate::injector::Injector::new). Defaults match the pages tree the
//! tool was written for; nothing is read from files or command-line arguments.

use crate::error::InjectError;
use crate::transform;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Placeholder in the snippet template that receives the relative script path
pub const PATH_PLACEHOLDER: &str = "{path}";

/// Maps a file's depth below the root to the number of `../` segments in front of
/// the script target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptPathPolicy {
    /// Depth 0 climbs one level, anything deeper climbs two.
    #[default]
    TwoTier,
    /// Climb `depth + 1` levels.
    PerLevel,
}

impl ScriptPathPolicy {
    /// Number of `../` segments for a file at `depth`
    pub fn levels_up(self, depth: usize) -> usize {
        match self {
            ScriptPathPolicy::TwoTier => {
                if depth == 0 {
                    1
                } else {
                    2
                }
            }
            ScriptPathPolicy::PerLevel => depth + 1,
        }
    }
}

/// Injector configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectorConfig {
    /// Directory whose HTML files are processed (recursively)
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// File extension filter, without the leading dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Substring whose presence means the snippet is already there
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Substring the snippet is inserted in front of
    #[serde(default = "default_anchor")]
    pub anchor: String,

    /// Snippet text; `{path}` is replaced by the relative script path
    #[serde(default = "default_snippet_template")]
    pub snippet_template: String,

    /// Script location relative to the parent of the root
    #[serde(default = "default_script_target")]
    pub script_target: String,

    #[serde(default)]
    pub path_policy: ScriptPathPolicy,
}

fn default_root() -> PathBuf {
    PathBuf::from("pages")
}

fn default_extension() -> String {
    "html".to_string()
}

fn default_marker() -> String {
    "data-manager.js".to_string()
}

fn default_anchor() -> String {
    "</body>".to_string()
}

fn default_snippet_template() -> String {
    "    <!-- Dynamic System Scripts -->\n    <script src=\"{path}\"></script>\n".to_string()
}

fn default_script_target() -> String {
    "js/core/data-manager.js".to_string()
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extension: default_extension(),
            marker: default_marker(),
            anchor: default_anchor(),
            snippet_template: default_snippet_template(),
            script_target: default_script_target(),
            path_policy: ScriptPathPolicy::default(),
        }
    }
}

impl InjectorConfig {
    /// Default configuration rooted at `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Validate the configuration
    ///
    /// Does not touch the filesystem; root checks happen in `Injector::new`.
    pub fn validate(&self) -> Result<(), InjectError> {
        if self.marker.is_empty() {
            return Err(InjectError::InvalidConfig("marker cannot be empty".to_string()));
        }
        if self.anchor.is_empty() {
            return Err(InjectError::InvalidConfig("anchor cannot be empty".to_string()));
        }
        if self.extension.is_empty() {
            return Err(InjectError::InvalidConfig(
                "extension cannot be empty".to_string(),
            ));
        }
        if self.extension.starts_with('.') {
            return Err(InjectError::InvalidConfig(format!(
                "extension '{}' must not start with a dot",
                self.extension
            )));
        }
        if !self.snippet_template.contains(PATH_PLACEHOLDER) {
            return Err(InjectError::InvalidConfig(format!(
                "snippet template must contain '{}'",
                PATH_PLACEHOLDER
            )));
        }

        // A snippet without the marker would be inserted again on every run.
        // Deeper files only get more `../` segments than depth 1.
        for depth in [0, 1] {
            let snippet = transform::render_snippet(self, depth);
            if !snippet.contains(&self.marker) {
                return Err(InjectError::InvalidConfig(format!(
                    "rendered snippet does not contain marker '{}'",
                    self.marker
                )));
            }
        }

        Ok(())
    }
}
