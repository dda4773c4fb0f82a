use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use crate::catalog::command::acquire_item_cmd::{AcquireItemCommand, AcquireItemCommandRequest, AcquireItemCommandResponse};
use crate::catalog::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest, AddItemCommandResponse};
use crate::catalog::command::get_item_cmd::{GetItemCommand, GetItemCommandRequest, GetItemCommandResponse};
use crate::catalog::command::list_items_cmd::{ListItemsCommand, ListItemsCommandRequest, ListItemsCommandResponse};
use crate::catalog::command::release_item_cmd::{ReleaseItemCommand, ReleaseItemCommandRequest, ReleaseItemCommandResponse};
use crate::catalog::command::remove_item_cmd::{RemoveItemCommand, RemoveItemCommandRequest, RemoveItemCommandResponse};
use crate::catalog::command::reorder_items_cmd::{ReorderItemsCommand, ReorderItemsCommandRequest, ReorderItemsCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{json_to_server_error, ActionStatus, AppState, ServerError};

pub fn add_item(state: &mut AppState, json: Value) -> Result<AddItemCommandResponse, ServerError> {
    let req: AddItemCommandRequest = serde_json::from_value(json).map_err(json_to_server_error)?;
    let res = AddItemCommand::new(&mut *state.catalog).execute(req)?;
    Ok(res)
}

pub fn find_item_by_id(state: &mut AppState, json: Value) -> Result<GetItemCommandResponse, ServerError> {
    let req: GetItemCommandRequest = serde_json::from_value(json).map_err(json_to_server_error)?;
    let res = GetItemCommand::new(&mut *state.catalog).execute(req)?;
    Ok(res)
}

pub fn list_items(state: &mut AppState, _json: Value) -> Result<ListItemsCommandResponse, ServerError> {
    let res = ListItemsCommand::new(&mut *state.catalog).execute(ListItemsCommandRequest::new())?;
    Ok(res)
}

pub fn remove_item(state: &mut AppState, json: Value) -> Result<RemoveItemCommandResponse, ServerError> {
    let req: RemoveItemCommandRequest = serde_json::from_value(json).map_err(json_to_server_error)?;
    let res = RemoveItemCommand::new(&mut *state.catalog).execute(req)?;
    Ok(res)
}

pub fn acquire_item(state: &mut AppState, json: Value) -> Result<AcquireItemCommandResponse, ServerError> {
    let req: AcquireItemCommandRequest = serde_json::from_value(json).map_err(json_to_server_error)?;
    let res = AcquireItemCommand::new(&mut *state.catalog).execute(req)?;
    Ok(res)
}

pub fn release_item(state: &mut AppState, json: Value) -> Result<ReleaseItemCommandResponse, ServerError> {
    let req: ReleaseItemCommandRequest = serde_json::from_value(json).map_err(json_to_server_error)?;
    let res = ReleaseItemCommand::new(&mut *state.catalog).execute(req)?;
    Ok(res)
}

pub fn reorder_items(state: &mut AppState, json: Value) -> Result<ReorderItemsCommandResponse, ServerError> {
    let req: ReorderItemsCommandRequest = serde_json::from_value(json).map_err(json_to_server_error)?;
    let res = ReorderItemsCommand::new(&mut *state.catalog).execute(req)?;
    Ok(res)
}

fn to_value<T: Serialize>(res: T) -> Result<Value, ServerError> {
    serde_json::to_value(res).map_err(|err| (ActionStatus::Internal, format!("{}", err)))
}

// dispatch routes one action message, e.g. {"action": "borrow", "item_id": "..", "holder": ".."}
pub fn dispatch(state: &mut AppState, json: Value) -> Result<Value, ServerError> {
    let action = json.get("action").and_then(Value::as_str).map(str::to_string)
        .ok_or_else(|| (ActionStatus::BadRequest, "missing action".to_string()))?;
    debug!(action = action.as_str(), "dispatching");
    match action.as_str() {
        "add" => to_value(add_item(state, json)?),
        "get" => to_value(find_item_by_id(state, json)?),
        "list" => to_value(list_items(state, json)?),
        "remove" => to_value(remove_item(state, json)?),
        "borrow" | "download" => to_value(acquire_item(state, json)?),
        "return" => to_value(release_item(state, json)?),
        "reorder" => to_value(reorder_items(state, json)?),
        other => Err((ActionStatus::BadRequest, format!("unknown action {}", other))),
    }
}
