pub mod config_store;
pub mod renderer;
pub mod spin_observer;

pub use config_store::{ConfigError, ConfigStore};
pub use renderer::Renderer;
pub use spin_observer::SpinObserver;
