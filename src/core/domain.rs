use std::path::PathBuf;
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

pub const DEFAULT_STORAGE_KEY: &str = "books";
pub const DEFAULT_STORE_PATH: &str = "bookshelf.json";
pub const DEV_STORE_PATH: &str = "bookshelf-dev.json";

// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    // key of the single store entry holding the serialized catalog
    pub storage_key: String,
    // backing file when the catalog is kept in a file store
    pub store_path: PathBuf,
    // populate the default holdings when no items were persisted
    pub seed_defaults: bool,
}

impl Configuration {
    pub fn new(storage_key: &str) -> Self {
        Configuration {
            storage_key: storage_key.to_string(),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            seed_defaults: true,
        }
    }

    pub fn with_store_path(mut self, store_path: PathBuf) -> Self {
        self.store_path = store_path;
        self
    }

    // sessions always persist; development sessions keep their own file
    pub fn session(dev_mode: bool) -> Self {
        let config = Configuration::default();
        if dev_mode {
            config.with_store_path(PathBuf::from(DEV_STORE_PATH))
        } else {
            config
        }
    }

    pub fn without_defaults(mut self) -> Self {
        self.seed_defaults = false;
        self
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(DEFAULT_STORAGE_KEY)
    }
}
