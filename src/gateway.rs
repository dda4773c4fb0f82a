pub mod events;
pub mod logs;
pub mod memory;
