use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::{KeyValueStore, RepositoryStore};

// MemoryStore keeps entries for the lifetime of the process; clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> LibraryResult<MutexGuard<'_, HashMap<String, String>>> {
        self.entries.lock().map_err(|err| LibraryError::runtime(
            format!("memory store lock poisoned {:?}", err).as_str(), None))
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> LibraryResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> LibraryResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> LibraryResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

// FileStore keeps all entries in one JSON object on disk, e.g. {"books": "[...]"}
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    fn read_entries(&self) -> LibraryResult<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(contents.as_str())?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(LibraryError::from(err)),
        }
    }

    // written to a sibling file first so a failed write never truncates the store
    fn write_entries(&self, entries: &BTreeMap<String, String>) -> LibraryResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_string_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        debug!("wrote {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> LibraryResult<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> LibraryResult<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove_item(&mut self, key: &str) -> LibraryResult<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

// helper method to build the key-value store selected by store
pub fn build_store(store: RepositoryStore, config: &Configuration) -> Box<dyn KeyValueStore> {
    match store {
        RepositoryStore::Memory => {
            Box::new(MemoryStore::new())
        }
        RepositoryStore::File => {
            Box::new(FileStore::new(config.store_path.as_path()))
        }
    }
}

// logs go to stderr so stdout only carries the session output
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .json()
        .init();
}
