//! TOML-backed variable store.
//!
//! One flat table of `key = bool` pairs. The whole table loads at open
//! and every write persists it back via write-to-temp-then-rename, so a
//! concurrent reader never observes a partially written file.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use shunt_core::{Result, StoreError, VariableStore};

/// Durable [`VariableStore`] over a TOML file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, bool>,
}

impl FileStore {
    /// Open the store at `path`. An absent file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            toml::from_str(&raw).map_err(|e| StoreError::Malformed {
                path: path.clone(),
                message: e.to_string(),
            })?
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), keys = values.len(), "variable store opened");
        Ok(Self { path, values })
    }

    /// The backing file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        let rendered = toml::to_string(&self.values).map_err(|e| StoreError::Malformed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        atomic_write(&self.path, &rendered)
    }
}

impl VariableStore for FileStore {
    fn get(&self, key: &str) -> Result<bool> {
        Ok(self.values.get(key).copied().unwrap_or(false))
    }

    fn set(&mut self, key: &str, value: bool) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.save()
    }
}

/// Write `content` to `path` through a temp file in the same directory,
/// then rename over the target.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("store");
    let temp_path = parent.join(format!(".{}.tmp.{}", file_name, std::process::id()));

    {
        let mut temp_file = std::fs::File::create(&temp_path)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.sync_all()?;
    }

    std::fs::rename(&temp_path, path).map_err(|e| {
        let _ = std::fs::remove_file(&temp_path);
        StoreError::Io(e)
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn store_path(tmp: &TempDir) -> PathBuf {
        tmp.path().join("variables.toml")
    }

    #[test]
    fn absent_file_opens_empty() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::open(store_path(&tmp)).unwrap();

        assert!(!store.get("shunt_search").unwrap());
        assert!(!store_path(&tmp).exists());
    }

    #[test]
    fn writes_persist_across_reopen() {
        let tmp = TempDir::new().unwrap();

        let mut store = FileStore::open(store_path(&tmp)).unwrap();
        assert_eq!(store.path(), store_path(&tmp));
        store.set("shunt_search", true).unwrap();
        store.set("shunt_uploads", false).unwrap();

        let reopened = FileStore::open(store_path(&tmp)).unwrap();
        assert!(reopened.get("shunt_search").unwrap());
        assert!(!reopened.get("shunt_uploads").unwrap());
        assert!(!reopened.get("shunt_other").unwrap());
    }

    #[test]
    fn file_is_a_flat_toml_table() {
        let tmp = TempDir::new().unwrap();

        let mut store = FileStore::open(store_path(&tmp)).unwrap();
        store.set("shunt_search", true).unwrap();

        let raw = std::fs::read_to_string(store_path(&tmp)).unwrap();
        assert_eq!(raw.trim(), "shunt_search = true");
    }

    #[test]
    fn overwrite_keeps_a_single_entry() {
        let tmp = TempDir::new().unwrap();

        let mut store = FileStore::open(store_path(&tmp)).unwrap();
        store.set("shunt_search", true).unwrap();
        store.set("shunt_search", false).unwrap();

        let reopened = FileStore::open(store_path(&tmp)).unwrap();
        assert!(!reopened.get("shunt_search").unwrap());

        let raw = std::fs::read_to_string(store_path(&tmp)).unwrap();
        assert_eq!(raw.matches("shunt_search").count(), 1);
    }

    #[test]
    fn malformed_file_reports_its_path() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(store_path(&tmp), "shunt_search = \"yes\"\n").unwrap();

        let err = FileStore::open(store_path(&tmp)).unwrap_err();
        match err {
            StoreError::Malformed { path, .. } => assert_eq!(path, store_path(&tmp)),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn no_temp_file_is_left_behind() {
        let tmp = TempDir::new().unwrap();

        let mut store = FileStore::open(store_path(&tmp)).unwrap();
        store.set("shunt_search", true).unwrap();

        let leftovers: Vec<_> = std::fs::read_dir(tmp.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().contains(".tmp."))
            .collect();
        assert!(leftovers.is_empty());
    }
}
