use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub struct ReleaseItemCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> ReleaseItemCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReleaseItemCommandRequest {
    pub item_id: String,
}

impl ReleaseItemCommandRequest {
    pub fn new(item_id: &str) -> Self {
        Self {
            item_id: item_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReleaseItemCommandResponse {
    pub released: bool,
    pub item: Option<ItemDto>,
}

impl ReleaseItemCommandResponse {
    pub fn new(released: bool, item: Option<ItemDto>) -> Self {
        Self {
            released,
            item,
        }
    }
}

impl<'a> Command<ReleaseItemCommandRequest, ReleaseItemCommandResponse> for ReleaseItemCommand<'a> {
    fn execute(&mut self, req: ReleaseItemCommandRequest) -> Result<ReleaseItemCommandResponse, CommandError> {
        let released = self.catalog_service.release_item(req.item_id.as_str())?;
        let item = self.catalog_service.find_item_by_id(req.item_id.as_str()).map(ItemDto::from);
        Ok(ReleaseItemCommandResponse::new(released, item))
    }
}
