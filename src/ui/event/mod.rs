pub mod handler;

use crossterm::event::KeyEvent;

#[derive(Clone, Debug)]
pub enum Event {
    Init,
    Key(KeyEvent),
    /// Bracketed paste, delivered as one chunk.
    Paste(String),
    Resize(u16, u16),
    Quit,
}
