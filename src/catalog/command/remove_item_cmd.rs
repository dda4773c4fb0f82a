use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveItemCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> RemoveItemCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveItemCommandRequest {
    pub item_id: String,
}

impl RemoveItemCommandRequest {
    pub fn new(item_id: &str) -> Self {
        Self {
            item_id: item_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveItemCommandResponse {
    pub removed: bool,
}

impl RemoveItemCommandResponse {
    pub fn new(removed: bool) -> Self {
        Self {
            removed,
        }
    }
}

impl<'a> Command<RemoveItemCommandRequest, RemoveItemCommandResponse> for RemoveItemCommand<'a> {
    fn execute(&mut self, req: RemoveItemCommandRequest) -> Result<RemoveItemCommandResponse, CommandError> {
        self.catalog_service.remove_item(req.item_id.as_str())
            .map_err(CommandError::from).map(RemoveItemCommandResponse::new)
    }
}
