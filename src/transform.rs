//! Pure text operations: script path selection, snippet rendering and insertion.
//!
//! Nothing here touches the filesystem. Content is treated as raw text; the anchor
//! is located with a plain substring search.

use crate::config::{InjectorConfig, PATH_PLACEHOLDER};

/// What to do with a file's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// Marker found; leave the file alone
    AlreadyPresent,
    /// Marker and anchor both missing; nothing to insert in front of
    NoAnchor,
    /// Write this content back
    Insert(String),
}

/// Relative path to the script for a file at `depth`
pub fn relative_script_path(config: &InjectorConfig, depth: usize) -> String {
    let levels = config.path_policy.levels_up(depth);
    format!("{}{}", "../".repeat(levels), config.script_target)
}

/// Snippet for a file at `depth`
pub fn render_snippet(config: &InjectorConfig, depth: usize) -> String {
    config
        .snippet_template
        .replace(PATH_PLACEHOLDER, &relative_script_path(config, depth))
}

/// Insert `snippet` immediately before the first occurrence of `anchor`.
///
/// Returns `None` when the anchor does not occur. Later occurrences are untouched.
pub fn insert_before_anchor(content: &str, anchor: &str, snippet: &str) -> Option<String> {
    let at = content.find(anchor)?;
    let mut out = String::with_capacity(content.len() + snippet.len());
    out.push_str(&content[..at]);
    out.push_str(snippet);
    out.push_str(&content[at..]);
    Some(out)
}

/// Decide what happens to `content` for a file at `depth`
///
/// The marker check comes first, so a file that already references the script is
/// never rewritten, whether or not it has an anchor.
pub fn plan(config: &InjectorConfig, content: &str, depth: usize) -> Plan {
    if content.contains(&config.marker) {
        return Plan::AlreadyPresent;
    }
    let snippet = render_snippet(config, depth);
    match insert_before_anchor(content, &config.anchor, &snippet) {
        Some(updated) => Plan::Insert(updated),
        None => Plan::NoAnchor,
    }
}
