//! File-backed library of named transfer functions.
//!
//! The store is an explicit collaborator handed a path, never process
//! state: each command opens the file, mutates, and writes back. Entries
//! keep the raw comma-separated coefficient strings so a saved function
//! round-trips exactly as the user typed it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A saved transfer function, as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedFunction {
    pub numerator: String,
    pub denominator: String,
}

/// Insertion-ordered library keyed by user-chosen name.
#[derive(Debug, Default)]
pub struct FunctionLibrary {
    path: PathBuf,
    entries: IndexMap<String, SavedFunction>,
}

impl FunctionLibrary {
    /// Open the library at `path`, treating a missing file as empty.
    pub fn open(path: &Path) -> Result<Self> {
        let entries = if path.exists() {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read library {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("library {} is not valid JSON", path.display()))?
        } else {
            IndexMap::new()
        };
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Save a function under `name`. Duplicate names are rejected rather
    /// than silently overwritten.
    pub fn save(&mut self, name: &str, function: SavedFunction) -> Result<()> {
        if self.entries.contains_key(name) {
            bail!("a function named '{name}' already exists");
        }
        self.entries.insert(name.to_string(), function);
        self.persist()
    }

    pub fn load(&self, name: &str) -> Result<&SavedFunction> {
        self.entries
            .get(name)
            .with_context(|| format!("no saved function named '{name}'"))
    }

    pub fn delete(&mut self, name: &str) -> Result<()> {
        if self.entries.shift_remove(name).is_none() {
            bail!("no saved function named '{name}'");
        }
        self.persist()
    }

    /// Names and entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &SavedFunction)> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("failed to write library {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_library_path(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("routhier-library-{tag}-{nanos}.json"))
    }

    fn sample() -> SavedFunction {
        SavedFunction {
            numerator: "1, 2".to_string(),
            denominator: "1, 3, 2".to_string(),
        }
    }

    #[test]
    fn missing_file_is_an_empty_library() {
        let path = temp_library_path("missing");
        let lib = FunctionLibrary::open(&path).unwrap();
        assert!(lib.is_empty());
    }

    #[test]
    fn save_load_round_trip() {
        let path = temp_library_path("roundtrip");
        let mut lib = FunctionLibrary::open(&path).unwrap();
        lib.save("lag", sample()).unwrap();

        let reopened = FunctionLibrary::open(&path).unwrap();
        assert_eq!(reopened.load("lag").unwrap(), &sample());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let path = temp_library_path("duplicate");
        let mut lib = FunctionLibrary::open(&path).unwrap();
        lib.save("lag", sample()).unwrap();
        assert!(lib.save("lag", sample()).is_err());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn delete_removes_the_entry() {
        let path = temp_library_path("delete");
        let mut lib = FunctionLibrary::open(&path).unwrap();
        lib.save("lag", sample()).unwrap();
        lib.delete("lag").unwrap();
        assert!(lib.is_empty());
        assert!(lib.delete("lag").is_err());
        let _ = fs::remove_file(&path);
    }
}
