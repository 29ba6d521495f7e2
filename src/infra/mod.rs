pub use gacha_app as app;
pub use gacha_domain as domain;

pub mod adapters;
pub mod config;
pub mod logging;
