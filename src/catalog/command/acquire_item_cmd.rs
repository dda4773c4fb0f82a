use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

// AcquireItemCommand covers both borrowing a book and downloading an e-book
pub struct AcquireItemCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AcquireItemCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AcquireItemCommandRequest {
    pub item_id: String,
    #[serde(default)]
    pub holder: String,
}

impl AcquireItemCommandRequest {
    pub fn new(item_id: &str, holder: &str) -> Self {
        Self {
            item_id: item_id.to_string(),
            holder: holder.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AcquireItemCommandResponse {
    pub acquired: bool,
    pub item: Option<ItemDto>,
}

impl AcquireItemCommandResponse {
    pub fn new(acquired: bool, item: Option<ItemDto>) -> Self {
        Self {
            acquired,
            item,
        }
    }
}

impl<'a> Command<AcquireItemCommandRequest, AcquireItemCommandResponse> for AcquireItemCommand<'a> {
    fn execute(&mut self, req: AcquireItemCommandRequest) -> Result<AcquireItemCommandResponse, CommandError> {
        let acquired = self.catalog_service.acquire_item(req.item_id.as_str(), req.holder.as_str())?;
        let item = self.catalog_service.find_item_by_id(req.item_id.as_str()).map(ItemDto::from);
        Ok(AcquireItemCommandResponse::new(acquired, item))
    }
}
