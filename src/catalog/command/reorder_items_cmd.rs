use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Identifiable;

pub struct ReorderItemsCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> ReorderItemsCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

// item_ids is the order the cards were dropped into
#[derive(Debug, Deserialize)]
pub struct ReorderItemsCommandRequest {
    pub item_ids: Vec<String>,
}

impl ReorderItemsCommandRequest {
    pub fn new(item_ids: Vec<String>) -> Self {
        Self {
            item_ids,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReorderItemsCommandResponse {
    pub item_ids: Vec<String>,
}

impl ReorderItemsCommandResponse {
    pub fn new(item_ids: Vec<String>) -> Self {
        Self {
            item_ids,
        }
    }
}

impl<'a> Command<ReorderItemsCommandRequest, ReorderItemsCommandResponse> for ReorderItemsCommand<'a> {
    fn execute(&mut self, req: ReorderItemsCommandRequest) -> Result<ReorderItemsCommandResponse, CommandError> {
        self.catalog_service.reorder(&req.item_ids)?;
        Ok(ReorderItemsCommandResponse::new(self.catalog_service.items().iter().map(|i| i.id()).collect()))
    }
}
