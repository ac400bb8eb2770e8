//! Key-value snapshot stores.
//!
//! The persistence target is consumed opaquely: string keys to string
//! blobs, synchronous, last write wins. `MemoryStore` backs tests and
//! embeddings with their own persistence; `FileStore` keeps one JSON file
//! per key under a platform data directory.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::warn;

use crate::data::StoreResult;

/// Opaque snapshot storage, local and synchronous.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// On-disk store: one `<key>.json` file per key under a fixed directory.
///
/// Write failures are logged, not surfaced; the worst case for this tool
/// is a stale snapshot on the next run.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn new(dir: PathBuf) -> StoreResult<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The platform-default location: `<data_dir>/inputviz`.
    pub fn default_location() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("inputviz"))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(key, error = %e, "failed to read snapshot file");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = fs::write(self.path_for(key), value) {
            warn!(key, error = %e, "failed to write snapshot file");
        }
    }

    fn remove(&mut self, key: &str) {
        if let Err(e) = fs::remove_file(self.path_for(key)) {
            if e.kind() != ErrorKind::NotFound {
                warn!(key, error = %e, "failed to remove snapshot file");
            }
        }
    }
}
