pub mod core;
pub mod items;
pub mod catalog;
pub mod gateway;
pub mod utils;
