//! Key-value persistence under ~/.flap/.
//!
//! The engine treats storage as a plain collaborator behind
//! [`BestScoreStore`]; the file-backed store keeps one file per key so a
//! missing or mangled entry only ever costs that one value.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::constants::BEST_SCORE_KEY;

/// Key-value collaborator for the persisted best score.
///
/// Values are plain strings; the best score is stored as a base-10
/// integer. Reads of absent or unparsable values default to 0 at the
/// call site, and writes are best-effort.
pub trait BestScoreStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// Parse the stored best score, defaulting to 0 when missing or malformed.
pub fn read_best_score(store: &dyn BestScoreStore) -> u32 {
    store
        .get(BEST_SCORE_KEY)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}

/// Get the ~/.flap/ directory path, creating it if needed.
pub fn flap_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".flap");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Load a JSON file from ~/.flap/, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    let path = match flap_dir() {
        Ok(dir) => dir.join(filename),
        Err(_) => return T::default(),
    };
    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// File-backed store with one file per key.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new() -> io::Result<Self> {
        Ok(Self { dir: flap_dir()? })
    }

    /// Store rooted at an explicit directory (used by tests).
    pub fn at(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl BestScoreStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.dir.join(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(key), value)
    }
}

/// In-memory store for tests and headless simulation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BestScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(BEST_SCORE_KEY), None);
        store.set(BEST_SCORE_KEY, "17").unwrap();
        assert_eq!(store.get(BEST_SCORE_KEY).as_deref(), Some("17"));
    }

    #[test]
    fn test_read_best_score_defaults_to_zero() {
        let store = MemoryStore::new();
        assert_eq!(read_best_score(&store), 0);
    }

    #[test]
    fn test_read_best_score_malformed_value() {
        let mut store = MemoryStore::new();
        store.set(BEST_SCORE_KEY, "not a number").unwrap();
        assert_eq!(read_best_score(&store), 0);
    }

    #[test]
    fn test_read_best_score_tolerates_whitespace() {
        let mut store = MemoryStore::new();
        store.set(BEST_SCORE_KEY, " 42\n").unwrap();
        assert_eq!(read_best_score(&store), 42);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join("flap_store_test");
        let _ = fs::remove_dir_all(&dir);
        let mut store = FileStore::at(dir.clone());
        assert_eq!(store.get(BEST_SCORE_KEY), None);
        store.set(BEST_SCORE_KEY, "9").unwrap();
        assert_eq!(store.get(BEST_SCORE_KEY).as_deref(), Some("9"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
