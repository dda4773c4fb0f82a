pub mod date;
pub mod kv;
