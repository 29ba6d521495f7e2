pub use gacha_app as app;
pub use gacha_domain as domain;
pub use gacha_infra as infra;
pub use gacha_ui as ui;

pub mod cli;
pub mod error;
