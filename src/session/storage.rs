//! Storage Backends
//!
//! Key-value stores with browser `localStorage` semantics: string keys,
//! string values, reads never fail.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// A persistent string key-value store
///
/// Reads return `None` when the key is missing or the store is unavailable.
/// Writes are best-effort; implementations log failures instead of
/// returning them.
pub trait StorageBackend: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str);

    fn remove_item(&self, key: &str);
}

/// In-process storage, lost when dropped
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.read().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.write() {
            items.insert(key.to_string(), value.to_string());
        }
    }

    fn remove_item(&self, key: &str) {
        if let Ok(mut items) = self.items.write() {
            items.remove(key);
        }
    }
}

/// File-backed storage
///
/// Keeps all items in a single JSON object on disk. The file is read on
/// every access so separate processes observe each other's writes.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> BTreeMap<String, String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return BTreeMap::new(),
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable session file {:?}: {}", self.path, e);
            BTreeMap::new()
        })
    }

    fn write_items(&self, items: &BTreeMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    tracing::warn!("Failed to create session directory {:?}: {}", parent, e);
                    return;
                }
            }
        }

        let result = serde_json::to_string_pretty(items)
            .map_err(|e| e.to_string())
            .and_then(|json| write_private(&self.path, &json).map_err(|e| e.to_string()));

        if let Err(e) = result {
            tracing::warn!("Failed to write session file {:?}: {}", self.path, e);
        }
    }

    fn modify(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) {
        let _guard = match self.lock.write() {
            Ok(guard) => guard,
            Err(_) => return,
        };

        let mut items = self.read_items();
        f(&mut items);

        if items.is_empty() {
            match std::fs::remove_file(&self.path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => tracing::warn!("Failed to remove session file {:?}: {}", self.path, e),
            }
        } else {
            self.write_items(&items);
        }
    }
}

/// Write a file readable only by its owner; the session holds a credential
fn write_private(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;

    // `mode` only applies on creation; tighten files left by older writes
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    }

    file.write_all(contents.as_bytes())
}

impl StorageBackend for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        let _guard = self.lock.read().ok()?;
        self.read_items().remove(key)
    }

    fn set_item(&self, key: &str, value: &str) {
        self.modify(|items| {
            items.insert(key.to_string(), value.to_string());
        });
    }

    fn remove_item(&self, key: &str) {
        self.modify(|items| {
            items.remove(key);
        });
    }
}
