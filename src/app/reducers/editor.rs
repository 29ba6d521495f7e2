//! Editor sub-reducer: focus changes and text editing on the focused field.

use std::time::Instant;

use crate::action::Action;
use crate::effect::Effect;
use crate::focused_field::FocusedField;
use crate::state::AppState;

/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_editor(state: &mut AppState, action: &Action, _now: Instant) -> Option<Vec<Effect>> {
    match action {
        Action::FocusNext => {
            state.focused_field = state.focused_field.next();
            Some(vec![])
        }
        Action::FocusPrev => {
            state.focused_field = state.focused_field.prev();
            Some(vec![])
        }
        Action::Input(c) => {
            if accepts(state.focused_field, *c) {
                state.focused_text_mut().insert_char(*c);
            }
            Some(vec![])
        }
        Action::Paste(text) => {
            let text: String = match state.focused_field {
                FocusedField::Candidates => text.replace("\r\n", "\n"),
                FocusedField::Count => text.chars().filter(char::is_ascii_digit).collect(),
            };
            state.focused_text_mut().insert_str(&text);
            Some(vec![])
        }
        Action::NewLine => {
            if state.focused_field == FocusedField::Candidates {
                state.candidates.insert_char('\n');
            }
            Some(vec![])
        }
        Action::Backspace => {
            state.focused_text_mut().backspace();
            Some(vec![])
        }
        Action::Delete => {
            state.focused_text_mut().delete();
            Some(vec![])
        }
        Action::MoveCursor(movement) => {
            state.focused_text_mut().move_cursor(*movement);
            Some(vec![])
        }
        _ => None,
    }
}

fn accepts(field: FocusedField, c: char) -> bool {
    match field {
        FocusedField::Candidates => !c.is_control(),
        FocusedField::Count => c.is_ascii_digit(),
    }
}
