use crate::text_field::CursorMove;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // Field focus
    FocusNext,
    FocusPrev,

    // Text editing on the focused field
    Input(char),
    Paste(String),
    NewLine,
    Backspace,
    Delete,
    MoveCursor(CursorMove),

    // Candidate list
    Expand,
    Reset,

    // Spinner
    Spin,
    StopSpin,

    // Overlays
    ToggleHelp,
    CloseHelp,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
