//! Shared fixtures for integration tests
//!
//! A `PagesFixture` owns a temporary directory with a `pages/` root inside it, so the
//! binary can be run with the temporary directory as its working directory.

use script_inject::{Injector, InjectorConfig};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

pub const PAGE: &str = "<html>\n<body>\n<p>x</p>\n</body>\n</html>\n";

pub struct PagesFixture {
    dir: TempDir,
}

impl PagesFixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("pages")).unwrap();
        Self { dir }
    }

    /// Directory containing `pages/`
    pub fn workdir(&self) -> &Path {
        self.dir.path()
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().join("pages")
    }

    /// Write a page at `relative` (forward slashes), creating parent directories
    pub fn write(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root().join(relative)).unwrap()
    }

    pub fn injector(&self) -> Injector {
        Injector::new(InjectorConfig::with_root(self.root())).unwrap()
    }

    /// Every file under the root with its raw bytes
    pub fn snapshot(&self) -> BTreeMap<PathBuf, Vec<u8>> {
        let root = self.root();
        WalkDir::new(&root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                let rel = e.path().strip_prefix(&root).unwrap().to_path_buf();
                (rel, fs::read(e.path()).unwrap())
            })
            .collect()
    }
}

/// Snippet the default configuration inserts for a given relative script path
pub fn snippet(script_path: &str) -> String {
    format!(
        "    <!-- Dynamic System Scripts -->\n    <script src=\"{}\"></script>\n",
        script_path
    )
}
