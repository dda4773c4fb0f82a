pub mod kv_item_repository;

use crate::core::library::LibraryResult;
use crate::items::domain::model::CatalogItem;

// ItemRepository persists the whole ordered catalog as one unit
pub trait ItemRepository: Send {
    // load the stored items in their stored order, None when nothing was ever stored
    fn load(&self) -> LibraryResult<Option<Vec<CatalogItem>>>;

    // replace the stored items, returns the number of items written
    fn save(&mut self, items: &[CatalogItem]) -> LibraryResult<usize>;
}
