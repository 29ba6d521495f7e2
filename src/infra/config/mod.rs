pub mod cache;
pub mod config_file;
