//! Batch injector: walks the root, plans each page and writes the result back.
//!
//! Files are handled one at a time: read fully, transformed, written with a single
//! call, then counted. A failure on one file is recorded in its outcome and the run
//! moves on to the next.

use crate::config::InjectorConfig;
use crate::error::InjectError;
use crate::outcome::{FileOutcome, RunSummary};
use crate::transform::{self, Plan};
use crate::walker::{HtmlFile, Walker, WalkerConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub struct Injector {
    config: InjectorConfig,
    root: PathBuf,
}

impl Injector {
    /// Validate the configuration and check that the root is an existing, listable
    /// directory.
    ///
    /// Fails before any file is touched.
    pub fn new(config: InjectorConfig) -> Result<Self, InjectError> {
        config.validate()?;

        let root = dunce::canonicalize(&config.root).map_err(|source| {
            InjectError::RootNotFound {
                path: config.root.clone(),
                source,
            }
        })?;
        if !root.is_dir() {
            return Err(InjectError::RootNotDirectory(root));
        }
        fs::read_dir(&root).map_err(|source| InjectError::RootUnreadable {
            path: root.clone(),
            source,
        })?;

        debug!(root = %root.display(), "Injector initialized");
        Ok(Self { config, root })
    }

    /// Canonical root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &InjectorConfig {
        &self.config
    }

    /// Pages that a run would visit, in processing order
    pub fn discover(&self) -> Result<Vec<HtmlFile>, InjectError> {
        let walker_config = WalkerConfig {
            extension: self.config.extension.clone(),
            ..WalkerConfig::default()
        };
        Walker::with_config(self.root.clone(), walker_config).walk()
    }

    /// Process a single page
    pub fn process(&self, file: &HtmlFile) -> FileOutcome {
        let content = match fs::read_to_string(&file.path) {
            Ok(content) => content,
            Err(source) => {
                warn!(path = %file.path.display(), error = %source, "Failed to read file");
                return FileOutcome::ReadFailed(InjectError::Read {
                    path: file.path.clone(),
                    source,
                });
            }
        };
        self.apply(file, &content)
    }

    /// Plan `content` as the current text of `file` and write the result back
    pub fn apply(&self, file: &HtmlFile, content: &str) -> FileOutcome {
        match transform::plan(&self.config, content, file.depth) {
            Plan::AlreadyPresent => {
                debug!(path = %file.path.display(), "Marker already present");
                FileOutcome::AlreadyPresent
            }
            Plan::NoAnchor => {
                warn!(
                    path = %file.path.display(),
                    anchor = %self.config.anchor,
                    "Anchor not found, file left unchanged"
                );
                FileOutcome::NoAnchor
            }
            Plan::Insert(updated) => {
                // One write call with the full content; never streamed in pieces.
                if let Err(source) = fs::write(&file.path, updated) {
                    warn!(path = %file.path.display(), error = %source, "Failed to write file");
                    return FileOutcome::WriteFailed(InjectError::Write {
                        path: file.path.clone(),
                        source,
                    });
                }
                debug!(path = %file.path.display(), depth = file.depth, "Snippet inserted");
                FileOutcome::Updated
            }
        }
    }

    /// Process every page and return the tally
    pub fn run(&self) -> Result<RunSummary, InjectError> {
        self.run_with(|_, _| {})
    }

    /// Process every page, handing each outcome to `on_outcome` before it is counted
    /// and dropped.
    ///
    /// Only a root that can no longer be listed fails the run; per-file problems are
    /// outcomes.
    pub fn run_with<F>(&self, mut on_outcome: F) -> Result<RunSummary, InjectError>
    where
        F: FnMut(&HtmlFile, &FileOutcome),
    {
        let files = self.discover()?;
        info!(root = %self.root.display(), files = files.len(), "Starting injection run");

        let summary = files
            .iter()
            .fold(RunSummary::default(), |mut summary, file| {
                let outcome = self.process(file);
                on_outcome(file, &outcome);
                summary.record(&outcome);
                summary
            });

        info!(
            total = summary.total,
            updated = summary.updated,
            already_present = summary.already_present,
            remainder = summary.remainder(),
            "Injection run finished"
        );
        Ok(summary)
    }
}
