pub mod acquire_item_cmd;
pub mod add_item_cmd;
pub mod get_item_cmd;
pub mod list_items_cmd;
pub mod release_item_cmd;
pub mod remove_item_cmd;
pub mod reorder_items_cmd;
