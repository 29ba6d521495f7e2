pub use gacha_app as app;
pub use gacha_domain as domain;

pub mod adapters;
pub mod components;
pub mod event;
pub mod theme;
pub mod tui;
