//! Key/value persistence for panel widths
//!
//! The controller only needs `get` and `set` on string records. `FileStore`
//! keeps every record in one JSON object under the config directory;
//! `MemoryStore` backs tests and `--ephemeral` runs.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// Minimal string key/value backend
pub trait WidthStore {
    /// Read the raw record for `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the record for `key`
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// In-memory store, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-filled with `(key, value)` pairs
    pub fn with_records<'a>(records: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl WidthStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.records.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON-file-backed store
///
/// The whole file is rewritten on every `set`. Records are tiny and writes
/// only happen when a width actually changes.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    records: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at the default location (`~/.config/codexmonitor/storage.json`)
    pub fn open_default() -> io::Result<Self> {
        let path = crate::config_paths::storage_file().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "No config directory available")
        })?;
        Ok(Self::open(path))
    }

    /// Open the store at `path`.
    ///
    /// A missing file starts empty. An unreadable or corrupt file also starts
    /// empty; it gets replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(records) => {
                    tracing::info!("Loaded layout storage from {}", path.display());
                    records
                }
                Err(e) => {
                    tracing::warn!(
                        "Ignoring corrupt layout storage at {}: {}",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No layout storage at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => {
                tracing::warn!("Failed to read layout storage at {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        Self { path, records }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.records)?;
        std::fs::write(&self.path, contents)
    }
}

impl WidthStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.records.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.records.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
