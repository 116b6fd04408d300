use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const DATA_DIR: &str = "flowercheck";
const STORAGE_FILE: &str = "storage.json";

/// String key/value storage capability.
///
/// Implementations decide where values live; callers only see keys.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

pub fn storage_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join(DATA_DIR).join(STORAGE_FILE))
}

/// Stores all keys in a single JSON object file.
///
/// No file locking - last writer wins if multiple instances run simultaneously.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform data directory, if one can be determined
    pub fn open_default() -> Option<Self> {
        storage_path().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or corrupt files read as an empty map
    fn read_map(&self) -> BTreeMap<String, String> {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };

        match serde_json::from_str(&contents) {
            Ok(map) => map,
            Err(e) => {
                log::debug!("Ignoring unreadable storage file {:?}: {}", self.path, e);
                BTreeMap::new()
            }
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_map().remove(key)
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        let mut map = self.read_map();
        map.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&map).map_err(io::Error::other)?;
        let mut file = File::create(&self.path)?;
        file.write_all(content.as_bytes())?;
        file.write_all(b"\n")?;

        Ok(())
    }
}

/// In-memory store for tests and for systems without a data directory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trips_values() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("storage.json"));

        store.set("recentFlowers", r#"["Roses"]"#).unwrap();
        store.set("other", "value").unwrap();

        let reopened = FileStore::new(dir.path().join("storage.json"));
        assert_eq!(
            reopened.get("recentFlowers").as_deref(),
            Some(r#"["Roses"]"#)
        );
        assert_eq!(reopened.get("other").as_deref(), Some("value"));
    }

    #[test]
    fn test_file_store_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("storage.json");
        let mut store = FileStore::new(&path);

        store.set("k", "v").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_file_store_missing_file_reads_nothing() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.get("recentFlowers"), None);
    }

    #[test]
    fn test_file_store_corrupt_file_reads_nothing_and_is_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json {").unwrap();

        let mut store = FileStore::new(&path);
        assert_eq!(store.get("recentFlowers"), None);

        store.set("recentFlowers", "[]").unwrap();
        assert_eq!(store.get("recentFlowers").as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_store_get_set() {
        let mut store = MemoryStore::new().with_entry("a", "1");
        assert_eq!(store.get("a").as_deref(), Some("1"));
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").as_deref(), Some("2"));
        assert_eq!(store.get("b"), None);
    }

    #[test]
    fn test_storage_path_ends_with_app_file() {
        if let Some(path) = storage_path() {
            assert!(path.ends_with(Path::new(DATA_DIR).join(STORAGE_FILE)));
        }
    }
}
