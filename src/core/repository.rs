use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

// KeyValueStore is the string-keyed medium the catalog is persisted to, modeled on browser local storage
pub trait KeyValueStore: Send {
    // get the value stored under key, None if the key was never set
    fn get_item(&self, key: &str) -> LibraryResult<Option<String>>;

    // store value under key, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> LibraryResult<()>;

    // remove key if present
    fn remove_item(&mut self, key: &str) -> LibraryResult<()>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    Memory,
    File,
}

