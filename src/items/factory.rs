use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::items::repository::ItemRepository;
use crate::items::repository::kv_item_repository::KVItemRepository;
use crate::utils::kv::build_store;

pub fn create_item_repository(config: &Configuration, store: RepositoryStore) -> Box<dyn ItemRepository> {
    let kv_store = build_store(store, config);
    Box::new(KVItemRepository::new(kv_store, config.storage_key.as_str()))
}
