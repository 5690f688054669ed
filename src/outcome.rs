//! Per-file outcomes and the run summary folded from them.

use crate::error::InjectError;

/// What happened to a single file. Every discovered file ends in exactly one of these.
#[derive(Debug)]
pub enum FileOutcome {
    Updated,
    AlreadyPresent,
    NoAnchor,
    ReadFailed(InjectError),
    WriteFailed(InjectError),
}

impl FileOutcome {
    /// True for outcomes that land in the remainder bucket
    pub fn is_remainder(&self) -> bool {
        !matches!(self, FileOutcome::Updated | FileOutcome::AlreadyPresent)
    }
}

/// Counters for a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub updated: usize,
    pub already_present: usize,
    pub no_anchor: usize,
    pub read_failed: usize,
    pub write_failed: usize,
}

impl RunSummary {
    /// Count one outcome
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.total += 1;
        match outcome {
            FileOutcome::Updated => self.updated += 1,
            FileOutcome::AlreadyPresent => self.already_present += 1,
            FileOutcome::NoAnchor => self.no_anchor += 1,
            FileOutcome::ReadFailed(_) => self.read_failed += 1,
            FileOutcome::WriteFailed(_) => self.write_failed += 1,
        }
    }

    /// Files neither updated nor already present
    pub fn remainder(&self) -> usize {
        self.total - self.updated - self.already_present
    }
}

impl<'a> FromIterator<&'a FileOutcome> for RunSummary {
    fn from_iter<I: IntoIterator<Item = &'a FileOutcome>>(iter: I) -> Self {
        iter.into_iter().fold(RunSummary::default(), |mut summary, outcome| {
            summary.record(outcome);
            summary
        })
    }
}
