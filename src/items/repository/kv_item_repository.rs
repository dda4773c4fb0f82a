use std::collections::HashSet;
use serde_json::Value;
use tracing::{debug, warn};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::KeyValueStore;
use crate::items::domain::model::CatalogItem;
use crate::items::dto::ItemDto;
use crate::items::repository::ItemRepository;

pub struct KVItemRepository {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl KVItemRepository {
    pub fn new(store: Box<dyn KeyValueStore>, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }
}

impl ItemRepository for KVItemRepository {
    fn load(&self) -> LibraryResult<Option<Vec<CatalogItem>>> {
        let json = match self.store.get_item(self.key.as_str())? {
            Some(json) => json,
            None => return Ok(None),
        };
        let values: Vec<Value> = serde_json::from_str(json.as_str()).map_err(|err| LibraryError::serialization(
            format!("stored entry {} is not a list of items {:?}", self.key, err).as_str()))?;
        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(values.len());
        for (ndx, value) in values.into_iter().enumerate() {
            match map_to_item(value) {
                Ok(item) => {
                    if seen.insert(item.id()) {
                        items.push(item);
                    } else {
                        warn!("skipping stored item {} with duplicate id {}", ndx, item.id());
                    }
                }
                Err(err) => {
                    warn!("skipping malformed stored item {}: {}", ndx, err);
                }
            }
        }
        Ok(Some(items))
    }

    fn save(&mut self, items: &[CatalogItem]) -> LibraryResult<usize> {
        let records: Vec<ItemDto> = items.iter().map(ItemDto::from).collect();
        let json = serde_json::to_string(&records)?;
        self.store.set_item(self.key.as_str(), json.as_str())?;
        debug!("saved {} items under {}", records.len(), self.key);
        Ok(records.len())
    }
}

fn map_to_item(value: Value) -> LibraryResult<CatalogItem> {
    let record: ItemDto = serde_json::from_value(value)?;
    CatalogItem::try_from(record)
}
