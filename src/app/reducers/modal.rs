//! Modal sub-reducer: help overlay toggles.

use std::time::Instant;

use crate::action::Action;
use crate::effect::Effect;
use crate::input_mode::InputMode;
use crate::state::AppState;

/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_modal(state: &mut AppState, action: &Action, _now: Instant) -> Option<Vec<Effect>> {
    match action {
        Action::ToggleHelp => {
            state.input_mode = if state.input_mode == InputMode::Help {
                InputMode::Normal
            } else {
                InputMode::Help
            };
            Some(vec![])
        }
        Action::CloseHelp => {
            state.input_mode = InputMode::Normal;
            Some(vec![])
        }
        _ => None,
    }
}
