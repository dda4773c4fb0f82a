use std::collections::HashMap;
use tracing::{debug, info, warn};
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::items::domain::Item;
use crate::items::domain::model::CatalogItem;
use crate::items::dto::ItemDto;
use crate::items::repository::ItemRepository;

const CATALOG_GROUP: &str = "catalog";

const DEFAULT_BOOKS: [(&str, &str); 4] = [
    ("To Kill a Mockingbird", "Harper Lee"),
    ("1984", "George Orwell"),
    ("Pride and Prejudice", "Jane Austen"),
    ("The Great Gatsby", "F. Scott Fitzgerald"),
];

const DEFAULT_EBOOKS: [(&str, &str, f64); 3] = [
    ("The Rust Programming Language", "Steve Klabnik and Carol Nichols", 5.2),
    ("Dune", "Frank Herbert", 3.1),
    ("Sapiens", "Yuval Noah Harari", 4.7),
];

/// The holdings a new catalog starts with: four physical books followed by three e-books.
pub fn default_items() -> Vec<CatalogItem> {
    let books = DEFAULT_BOOKS.iter()
        .map(|(title, author)| CatalogItem::physical(title, author));
    let ebooks = DEFAULT_EBOOKS.iter()
        .map(|(title, author, size_mb)| CatalogItem::digital(title, author, *size_mb));
    books.chain(ebooks).collect()
}

pub struct CatalogServiceImpl {
    seed_defaults: bool,
    items: Vec<CatalogItem>,
    item_repository: Box<dyn ItemRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, item_repository: Box<dyn ItemRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            seed_defaults: config.seed_defaults,
            items: vec![],
            item_repository,
            events_publisher,
        }
    }

    /// Loads the persisted items. When nothing usable was stored the default holdings
    /// are populated and persisted instead. Returns the number of items in the catalog.
    pub fn load(&mut self) -> LibraryResult<usize> {
        self.items = self.item_repository.load()?.unwrap_or_default();
        if self.items.is_empty() && self.seed_defaults {
            self.items = default_items();
            let size = self.item_repository.save(&self.items)?;
            info!("seeded catalog with {} default items", size);
        } else {
            debug!("loaded {} items", self.items.len());
        }
        Ok(self.items.len())
    }

    // Persists the current items and publishes event. If the event cannot be built or the
    // items cannot be saved, the items are put back to previous.
    fn commit(&mut self, previous: Vec<CatalogItem>, event: serde_json::Result<DomainEvent>) -> LibraryResult<()> {
        let saved = event.map_err(LibraryError::from)
            .and_then(|event| self.item_repository.save(&self.items).map(|_| event));
        match saved {
            Ok(event) => self.events_publisher.publish(&event),
            Err(err) => {
                warn!(retryable = err.retryable(), "discarding unsaved catalog change {}", err);
                self.items = previous;
                Err(err)
            }
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn items(&self) -> &[CatalogItem] {
        self.items.as_slice()
    }

    fn add_item(&mut self, item: CatalogItem) -> LibraryResult<bool> {
        let id = item.id();
        if self.find_item_by_id(id.as_str()).is_some() {
            debug!("item {} is already in the catalog", id);
            return Ok(false);
        }
        let event = DomainEvent::added(
            "item_added", CATALOG_GROUP, id.as_str(), &HashMap::new(), &ItemDto::from(&item));
        let previous = self.items.clone();
        self.items.push(item);
        self.commit(previous, event)?;
        Ok(true)
    }

    fn remove_item(&mut self, id: &str) -> LibraryResult<bool> {
        let previous = self.items.clone();
        self.items.retain(|item| !item.has_id(id));
        let removed = self.items.len() < previous.len();
        let event = DomainEvent::removed("item_removed", CATALOG_GROUP, id, &HashMap::new(), &id);
        self.commit(previous, event)?;
        Ok(removed)
    }

    fn find_item_by_id(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.has_id(id))
    }

    fn acquire_item(&mut self, id: &str, holder: &str) -> LibraryResult<bool> {
        if holder.trim().is_empty() {
            debug!("ignoring acquire of {} without a holder", id);
            return Ok(false);
        }
        let previous = self.items.clone();
        let item = match self.items.iter_mut().find(|item| item.has_id(id)) {
            Some(item) => item,
            None => return Ok(false),
        };
        if !item.acquire(holder) {
            return Ok(false);
        }
        let event = DomainEvent::acquired(
            "item_acquired", CATALOG_GROUP, id,
            &HashMap::from([("holder".to_string(), holder.to_string())]), &ItemDto::from(&*item));
        self.commit(previous, event)?;
        Ok(true)
    }

    fn release_item(&mut self, id: &str) -> LibraryResult<bool> {
        let previous = self.items.clone();
        let item = match self.items.iter_mut().find(|item| item.has_id(id)) {
            Some(item) => item,
            None => return Ok(false),
        };
        if !item.release() {
            return Ok(false);
        }
        let event = DomainEvent::released(
            "item_released", CATALOG_GROUP, id, &HashMap::new(), &ItemDto::from(&*item));
        self.commit(previous, event)?;
        Ok(true)
    }

    // Items keep their state, only positions change. Unknown and repeated ids are
    // ignored; items missing from ids follow the supplied ones in their old order.
    fn reorder(&mut self, ids: &[String]) -> LibraryResult<()> {
        let previous = self.items.clone();
        let mut remaining: Vec<Option<CatalogItem>> = self.items.drain(..).map(Some).collect();
        let mut reordered = Vec::with_capacity(remaining.len());
        for id in ids {
            let slot = remaining.iter_mut()
                .find(|slot| slot.as_ref().map_or(false, |item| item.has_id(id)));
            if let Some(item) = slot.and_then(Option::take) {
                reordered.push(item);
            }
        }
        reordered.extend(remaining.into_iter().flatten());
        self.items = reordered;
        let order: Vec<String> = self.items.iter().map(|item| item.id()).collect();
        let event = DomainEvent::reordered("items_reordered", CATALOG_GROUP, "", &HashMap::new(), &order);
        self.commit(previous, event)
    }
}
