pub use gacha_domain as domain;

pub mod action;
pub mod config;
pub mod effect;
pub mod effect_runner;
pub mod focused_field;
pub mod input_mode;
pub mod keybindings;
pub mod message_state;
pub mod ports;
pub mod reducer;
pub mod reducers;
pub mod render_schedule;
pub mod spinner;
pub mod state;
pub mod text_field;
