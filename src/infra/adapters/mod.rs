pub mod config_store;
pub mod log_observer;

pub use config_store::TomlConfigStore;
pub use log_observer::TracingSpinObserver;
