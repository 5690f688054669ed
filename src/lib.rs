//! Script Inject: batch insertion of a shared script reference into HTML pages
//!
//! Walks a directory of HTML files and inserts a snippet before the closing body tag
//! of every page that does not reference the script yet. The relative script path
//! depends on how deeply the page is nested under the root.

pub mod config;
pub mod error;
pub mod injector;
pub mod logging;
pub mod outcome;
pub mod report;
pub mod transform;
pub mod walker;

pub use config::{InjectorConfig, ScriptPathPolicy};
pub use error::InjectError;
pub use injector::Injector;
pub use outcome::{FileOutcome, RunSummary};
