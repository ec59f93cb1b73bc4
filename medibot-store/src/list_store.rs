//! JSON-array lists under string keys, one file per key.
//!
//! Plain read-modify-write with no locking and no schema version. A missing
//! file reads as an empty list.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ListStore {
    dir: PathBuf,
}

impl ListStore {
    /// Open (and create) the backing directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            bail!("invalid list key {key:?}");
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let p = self.path(key)?;
        if !p.exists() {
            return Ok(Vec::new());
        }
        let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
        if s.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&s).with_context(|| format!("parse {}", p.display()))
    }

    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let p = self.path(key)?;
        let s = serde_json::to_string_pretty(items)?;
        fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
        tracing::debug!(key, items = items.len(), "list saved");
        Ok(())
    }

    pub fn append<T: Serialize + DeserializeOwned>(&self, key: &str, item: T) -> Result<usize> {
        let mut items: Vec<T> = self.load(key)?;
        items.push(item);
        self.save(key, &items)?;
        Ok(items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ListStore::open(tmp.path()).unwrap();
        let items: Vec<String> = store.load("nothing-here").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ListStore::open(tmp.path().join("nested")).unwrap();
        assert_eq!(store.append("notes", "first".to_string()).unwrap(), 1);
        assert_eq!(store.append("notes", "second".to_string()).unwrap(), 2);
        let items: Vec<String> = store.load("notes").unwrap();
        assert_eq!(items, vec!["first", "second"]);
        assert!(tmp.path().join("nested/notes.json").exists());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ListStore::open(tmp.path()).unwrap();
        assert!(store.path("../escape").is_err());
        assert!(store.path("").is_err());
        assert!(store.path("symptom-checks").is_ok());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ListStore::open(tmp.path()).unwrap();
        fs::write(tmp.path().join("cart.json"), "{not json").unwrap();
        let err = store.load::<String>("cart").unwrap_err();
        assert!(format!("{err:#}").contains("parse"));
    }
}
