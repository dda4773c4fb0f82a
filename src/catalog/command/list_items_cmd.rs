use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub struct ListItemsCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> ListItemsCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListItemsCommandRequest {}

impl ListItemsCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Serialize)]
pub struct ListItemsCommandResponse {
    pub items: Vec<ItemDto>,
}

impl ListItemsCommandResponse {
    pub fn new(items: Vec<ItemDto>) -> Self {
        Self {
            items,
        }
    }
}

impl<'a> Command<ListItemsCommandRequest, ListItemsCommandResponse> for ListItemsCommand<'a> {
    fn execute(&mut self, _req: ListItemsCommandRequest) -> Result<ListItemsCommandResponse, CommandError> {
        let items = self.catalog_service.items().iter().map(ItemDto::from).collect();
        Ok(ListItemsCommandResponse::new(items))
    }
}
