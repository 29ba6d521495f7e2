mod candidates;
mod editor;
mod modal;
mod spin;

pub use candidates::reduce_candidates;
pub use editor::reduce_editor;
pub use modal::reduce_modal;
pub use spin::{reduce_spin, spinner_effects};
