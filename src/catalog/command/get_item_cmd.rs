use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;
use crate::items::dto::ItemDto;

pub struct GetItemCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> GetItemCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetItemCommandRequest {
    pub item_id: String,
}

impl GetItemCommandRequest {
    pub fn new(item_id: &str) -> Self {
        Self {
            item_id: item_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetItemCommandResponse {
    pub item: ItemDto,
}

impl GetItemCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            item,
        }
    }
}

impl<'a> Command<GetItemCommandRequest, GetItemCommandResponse> for GetItemCommand<'a> {
    fn execute(&mut self, req: GetItemCommandRequest) -> Result<GetItemCommandResponse, CommandError> {
        match self.catalog_service.find_item_by_id(req.item_id.as_str()) {
            Some(item) => Ok(GetItemCommandResponse::new(ItemDto::from(item))),
            None => Err(LibraryError::not_found(format!("item {} not found", req.item_id).as_str()).into()),
        }
    }
}
