//! Centralized keybinding definitions.
//! Single source of truth for key/description used by Footer and Help.

use super::action::Action;
use super::text_field::CursorMove;

#[derive(Clone)]
pub struct KeyBinding {
    /// Short key for Footer (e.g., "^S", "Tab")
    pub key_short: &'static str,
    /// Display key for Help (e.g., "Ctrl+S")
    pub key: &'static str,
    /// Short description for Footer (e.g., "Spin")
    pub desc_short: &'static str,
    /// Full description for Help (e.g., "Start spinning the roller")
    pub description: &'static str,
    pub action: Action,
}

impl KeyBinding {
    /// Returns (key_short, desc_short) tuple for Footer display
    pub const fn as_hint(&self) -> (&'static str, &'static str) {
        (self.key_short, self.desc_short)
    }
}

// =============================================================================
// Index Constants for Footer Lookup
// =============================================================================

pub mod idx {
    pub mod global {
        pub const SPIN: usize = 0;
        pub const STOP: usize = 1;
        pub const EXPAND: usize = 2;
        pub const RESET: usize = 3;
        pub const FOCUS: usize = 4;
        pub const HELP: usize = 5;
        pub const QUIT: usize = 6;
    }

    pub mod editor {
        pub const NEW_LINE: usize = 0;
        pub const COUNT_ENTER: usize = 1;
        pub const MOVE: usize = 2;
    }

    pub mod help {
        pub const CLOSE: usize = 0;
        pub const QUIT: usize = 1;
    }
}

// =============================================================================
// Global Keys (Normal mode)
// =============================================================================

pub const GLOBAL_KEYS: &[KeyBinding] = &[
    // idx 0: SPIN
    KeyBinding {
        key_short: "^S",
        key: "Ctrl+S",
        desc_short: "Spin",
        description: "Start spinning the roller",
        action: Action::Spin,
    },
    // idx 1: STOP
    KeyBinding {
        key_short: "Esc",
        key: "Esc",
        desc_short: "Stop",
        description: "Stop the roller on the current candidate",
        action: Action::StopSpin,
    },
    // idx 2: EXPAND
    KeyBinding {
        key_short: "^G",
        key: "Ctrl+G",
        desc_short: "Expand",
        description: "Expand the list to the requested count",
        action: Action::Expand,
    },
    // idx 3: RESET
    KeyBinding {
        key_short: "^R",
        key: "Ctrl+R",
        desc_short: "Reset",
        description: "Remove duplicates and clear the winner",
        action: Action::Reset,
    },
    // idx 4: FOCUS
    KeyBinding {
        key_short: "Tab",
        key: "Tab / Shift+Tab",
        desc_short: "Field",
        description: "Switch between Candidates and Count",
        action: Action::FocusNext,
    },
    // idx 5: HELP
    KeyBinding {
        key_short: "F1",
        key: "F1",
        desc_short: "Help",
        description: "Toggle help",
        action: Action::ToggleHelp,
    },
    // idx 6: QUIT
    KeyBinding {
        key_short: "^Q",
        key: "Ctrl+Q / Ctrl+C",
        desc_short: "Quit",
        description: "Quit application",
        action: Action::Quit,
    },
];

// =============================================================================
// Editor Keys
// =============================================================================

pub const EDITOR_KEYS: &[KeyBinding] = &[
    // idx 0: NEW_LINE
    KeyBinding {
        key_short: "Enter",
        key: "Enter",
        desc_short: "New line",
        description: "Start a new candidate (Candidates field)",
        action: Action::NewLine,
    },
    // idx 1: COUNT_ENTER
    KeyBinding {
        key_short: "Enter",
        key: "Enter",
        desc_short: "Expand",
        description: "Expand to the typed count (Count field)",
        action: Action::Expand,
    },
    // idx 2: MOVE
    KeyBinding {
        key_short: "←↑↓→",
        key: "Arrows / Home / End",
        desc_short: "Move",
        description: "Move the cursor",
        action: Action::MoveCursor(CursorMove::Left),
    },
];

// =============================================================================
// Help Overlay Keys
// =============================================================================

pub const HELP_KEYS: &[KeyBinding] = &[
    // idx 0: CLOSE
    KeyBinding {
        key_short: "Esc",
        key: "Esc / F1",
        desc_short: "Close",
        description: "Close help",
        action: Action::CloseHelp,
    },
    // idx 1: QUIT
    KeyBinding {
        key_short: "^Q",
        key: "Ctrl+Q",
        desc_short: "Quit",
        description: "Quit application",
        action: Action::Quit,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    /// Verify that idx constants are valid indexes into their respective arrays.
    #[test]
    fn idx_constants_are_within_bounds() {
        assert!(idx::global::SPIN < GLOBAL_KEYS.len());
        assert!(idx::global::STOP < GLOBAL_KEYS.len());
        assert!(idx::global::EXPAND < GLOBAL_KEYS.len());
        assert!(idx::global::RESET < GLOBAL_KEYS.len());
        assert!(idx::global::FOCUS < GLOBAL_KEYS.len());
        assert!(idx::global::HELP < GLOBAL_KEYS.len());
        assert!(idx::global::QUIT < GLOBAL_KEYS.len());

        assert!(idx::editor::NEW_LINE < EDITOR_KEYS.len());
        assert!(idx::editor::COUNT_ENTER < EDITOR_KEYS.len());
        assert!(idx::editor::MOVE < EDITOR_KEYS.len());

        assert!(idx::help::CLOSE < HELP_KEYS.len());
        assert!(idx::help::QUIT < HELP_KEYS.len());
    }

    #[test]
    fn idx_constants_point_at_matching_actions() {
        assert_eq!(GLOBAL_KEYS[idx::global::SPIN].action, Action::Spin);
        assert_eq!(GLOBAL_KEYS[idx::global::STOP].action, Action::StopSpin);
        assert_eq!(GLOBAL_KEYS[idx::global::EXPAND].action, Action::Expand);
        assert_eq!(GLOBAL_KEYS[idx::global::RESET].action, Action::Reset);
        assert_eq!(GLOBAL_KEYS[idx::global::QUIT].action, Action::Quit);
        assert_eq!(EDITOR_KEYS[idx::editor::COUNT_ENTER].action, Action::Expand);
        assert_eq!(HELP_KEYS[idx::help::CLOSE].action, Action::CloseHelp);
    }

    #[test]
    fn as_hint_uses_short_forms() {
        assert_eq!(GLOBAL_KEYS[idx::global::SPIN].as_hint(), ("^S", "Spin"));
    }
}
