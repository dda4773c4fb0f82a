use std::fmt;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;

// AppState is owned by the session driver and handed to every action
pub struct AppState {
    pub catalog: Box<dyn CatalogService>,
}

impl AppState {
    pub fn new(catalog: Box<dyn CatalogService>) -> AppState {
        AppState {
            catalog,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    BadRequest,
    NotFound,
    Internal,
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionStatus::BadRequest => write!(f, "bad_request"),
            ActionStatus::NotFound => write!(f, "not_found"),
            ActionStatus::Internal => write!(f, "internal"),
        }
    }
}

pub type ServerError = (ActionStatus, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (ActionStatus::BadRequest, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Storage { .. } => {
                (ActionStatus::Internal, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (ActionStatus::NotFound, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (ActionStatus::Internal, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (ActionStatus::BadRequest, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (ActionStatus::BadRequest, format!("{:?}", err))
            }
        }
    }
}
