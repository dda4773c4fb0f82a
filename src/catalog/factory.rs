use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;
use crate::gateway::events::EventPublisher;
use crate::gateway::logs::publisher::LogPublisher;
use crate::items::factory::create_item_repository;
use crate::items::repository::ItemRepository;

// changes are only reported to the logs; use create_catalog_service_with to observe them
pub fn create_catalog_service(config: &Configuration, store: RepositoryStore) -> LibraryResult<Box<dyn CatalogService>> {
    let item_repo = create_item_repository(config, store);
    create_catalog_service_with(config, item_repo, Box::new(LogPublisher::new()))
}

// builds and loads a catalog over caller supplied collaborators
pub fn create_catalog_service_with(config: &Configuration, item_repo: Box<dyn ItemRepository>,
                                   publisher: Box<dyn EventPublisher>) -> LibraryResult<Box<dyn CatalogService>> {
    let mut svc = CatalogServiceImpl::new(config, item_repo, publisher);
    let _ = svc.load()?;
    Ok(Box::new(svc))
}

#[cfg(test)]
mod tests {
    use crate::catalog::factory::{create_catalog_service, create_catalog_service_with};
    use crate::core::domain::{Configuration, Identifiable};
    use crate::core::repository::RepositoryStore;
    use crate::gateway::memory::publisher::MemoryPublisher;
    use crate::items::domain::Item;
    use crate::items::domain::model::CatalogItem;
    use crate::items::factory::create_item_repository;

    #[tokio::test]
    async fn test_should_create_memory_catalog() {
        let svc = create_catalog_service(&Configuration::new("books"), RepositoryStore::Memory).expect("should create");
        assert_eq!(7, svc.items().len());
    }

    #[tokio::test]
    async fn test_should_persist_file_catalog() {
        let dir = tempfile::tempdir().expect("should create dir");
        let config = Configuration::new("books").with_store_path(dir.path().join("shelf.json"));
        let mut svc = create_catalog_service(&config, RepositoryStore::File).expect("should create");
        svc.add_item(CatalogItem::physical("Emma", "Jane Austen")).expect("should add");

        let reopened = create_catalog_service(&config, RepositoryStore::File).expect("should create");
        assert_eq!(8, reopened.items().len());
        assert_eq!(svc.items(), reopened.items());
    }

    #[tokio::test]
    async fn test_should_persist_session_catalog() {
        let dir = tempfile::tempdir().expect("should create dir");
        let session = Configuration::session(true);
        let config = session.clone().with_store_path(dir.path().join(session.store_path.as_path()));
        let mut svc = create_catalog_service(&config, RepositoryStore::File).expect("should create");
        let id = svc.items()[0].id();
        assert!(svc.acquire_item(id.as_str(), "ann").expect("should acquire"));
        drop(svc);

        let reopened = create_catalog_service(&config, RepositoryStore::File).expect("should create");
        assert_eq!(Some("ann"), reopened.find_item_by_id(id.as_str()).expect("should find").holder());
    }

    #[tokio::test]
    async fn test_should_create_with_publisher() {
        let config = Configuration::new("books").without_defaults();
        let publisher = MemoryPublisher::new();
        let mut svc = create_catalog_service_with(&config, create_item_repository(&config, RepositoryStore::Memory),
                                                  Box::new(publisher.clone())).expect("should create");
        svc.add_item(CatalogItem::physical("Emma", "Jane Austen")).expect("should add");
        assert_eq!(1, publisher.pending().expect("should count"));
    }
}
