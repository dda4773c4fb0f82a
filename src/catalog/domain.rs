pub mod service;

use crate::core::library::LibraryResult;
use crate::items::domain::model::CatalogItem;

// CatalogService owns the ordered holdings; every successful mutation is persisted
// and published before the call returns.
pub trait CatalogService: Send {
    fn items(&self) -> &[CatalogItem];
    fn add_item(&mut self, item: CatalogItem) -> LibraryResult<bool>;
    fn remove_item(&mut self, id: &str) -> LibraryResult<bool>;
    fn find_item_by_id(&self, id: &str) -> Option<&CatalogItem>;
    fn acquire_item(&mut self, id: &str, holder: &str) -> LibraryResult<bool>;
    fn release_item(&mut self, id: &str) -> LibraryResult<bool>;
    fn reorder(&mut self, ids: &[String]) -> LibraryResult<()>;
}
