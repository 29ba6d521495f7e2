pub mod atoms;
pub mod candidates_editor;
pub mod count_field;
pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod layout;
pub mod molecules;
pub mod overlay;
pub mod roller;
pub mod status_message;
