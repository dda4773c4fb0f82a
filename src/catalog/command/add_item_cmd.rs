use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::ItemKind;
use crate::items::domain::model::CatalogItem;
use crate::items::dto::ItemDto;

pub struct AddItemCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddItemCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddItemCommandRequest {
    pub title: String,
    pub author: String,
    pub kind: ItemKind,
    #[serde(default, deserialize_with = "crate::items::dto::size::deserialize")]
    pub size_mb: Option<f64>,
}

impl AddItemCommandRequest {
    pub fn physical(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            kind: ItemKind::Physical,
            size_mb: None,
        }
    }

    pub fn digital(title: &str, author: &str, size_mb: f64) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            kind: ItemKind::Digital,
            size_mb: Some(size_mb),
        }
    }

    pub fn build_item(&self) -> Result<CatalogItem, CommandError> {
        let title = self.title.trim();
        let author = self.author.trim();
        if title.is_empty() || author.is_empty() {
            return Err(CommandError::validation("title and author are required"));
        }
        match self.kind {
            ItemKind::Physical => Ok(CatalogItem::physical(title, author)),
            ItemKind::Digital => match self.size_mb {
                Some(size) if size.is_finite() && size >= 0.0 => Ok(CatalogItem::digital(title, author, size)),
                other => Err(CommandError::validation(
                    format!("e-book size must be a non-negative number of MB, got {:?}", other).as_str())),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddItemCommandResponse {
    pub item: ItemDto,
    pub added: bool,
}

impl AddItemCommandResponse {
    pub fn new(item: ItemDto, added: bool) -> Self {
        Self {
            item,
            added,
        }
    }
}

impl<'a> Command<AddItemCommandRequest, AddItemCommandResponse> for AddItemCommand<'a> {
    fn execute(&mut self, req: AddItemCommandRequest) -> Result<AddItemCommandResponse, CommandError> {
        let item = req.build_item()?;
        let dto = ItemDto::from(&item);
        self.catalog_service.add_item(item).map_err(CommandError::from).map(|added| AddItemCommandResponse::new(dto, added))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::ItemKind;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_add_item() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test").without_defaults(), RepositoryStore::Memory).expect("should create");
        let res = AddItemCommand::new(&mut *svc).execute(AddItemCommandRequest::physical(" Emma ", "Jane Austen"))
            .expect("should add item");
        assert!(res.added);
        assert_eq!("Emma", res.item.title.as_str());
        let res = AddItemCommand::new(&mut *svc).execute(AddItemCommandRequest::digital("Dune", "Frank Herbert", 3.1))
            .expect("should add item");
        assert_eq!(ItemKind::Digital, res.item.kind);
        assert_eq!(Some(3.1), res.item.size_mb);
        assert_eq!(2, svc.items().len());
    }

    #[tokio::test]
    async fn test_should_reject_invalid_item() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test").without_defaults(), RepositoryStore::Memory).expect("should create");
        let mut cmd = AddItemCommand::new(&mut *svc);
        assert!(matches!(cmd.execute(AddItemCommandRequest::physical("", "Jane Austen")), Err(CommandError::Validation { .. })));
        assert!(matches!(cmd.execute(AddItemCommandRequest::digital("Dune", "Frank Herbert", -1.0)), Err(CommandError::Validation { .. })));
        let mut no_size = AddItemCommandRequest::digital("Dune", "Frank Herbert", 1.0);
        no_size.size_mb = None;
        assert!(matches!(cmd.execute(no_size), Err(CommandError::Validation { .. })));
        assert!(svc.items().is_empty());
    }

    #[tokio::test]
    async fn test_should_parse_form_request() {
        let req: AddItemCommandRequest = serde_json::from_str(
            r#"{"title": "Dune", "author": "Frank Herbert", "kind": "ebook", "size_mb": "2.5"}"#).expect("should parse");
        assert_eq!(ItemKind::Digital, req.kind);
        assert_eq!(Some(2.5), req.size_mb);
    }
}
