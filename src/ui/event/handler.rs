use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::action::Action;
use crate::app::focused_field::FocusedField;
use crate::app::input_mode::InputMode;
use crate::app::state::AppState;
use crate::app::text_field::CursorMove;

use super::Event;

pub fn handle_event(event: Event, state: &AppState) -> Action {
    match event {
        Event::Init => Action::Render,
        Event::Quit => Action::Quit,
        Event::Resize(w, h) => Action::Resize(w, h),
        Event::Key(key) => handle_key_event(key, state),
        Event::Paste(text) => match state.input_mode {
            InputMode::Normal => Action::Paste(text),
            InputMode::Help => Action::None,
        },
    }
}

fn handle_key_event(key: KeyEvent, state: &AppState) -> Action {
    // Ctrl+C / Ctrl+Q quit from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c' | 'q'))
    {
        return Action::Quit;
    }

    match state.input_mode {
        InputMode::Normal => handle_normal_mode(key, state.focused_field),
        InputMode::Help => handle_help_keys(key),
    }
}

fn handle_normal_mode(key: KeyEvent, focused: FocusedField) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') => Action::Spin,
            KeyCode::Char('g') => Action::Expand,
            KeyCode::Char('r') => Action::Reset,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::F(1) => Action::ToggleHelp,
        KeyCode::Esc => Action::StopSpin,
        KeyCode::Tab => Action::FocusNext,
        KeyCode::BackTab => Action::FocusPrev,

        KeyCode::Enter => match focused {
            FocusedField::Candidates => Action::NewLine,
            FocusedField::Count => Action::Expand,
        },

        // Editing
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Delete => Action::Delete,
        KeyCode::Left => Action::MoveCursor(CursorMove::Left),
        KeyCode::Right => Action::MoveCursor(CursorMove::Right),
        KeyCode::Up => Action::MoveCursor(CursorMove::Up),
        KeyCode::Down => Action::MoveCursor(CursorMove::Down),
        KeyCode::Home => Action::MoveCursor(CursorMove::Home),
        KeyCode::End => Action::MoveCursor(CursorMove::End),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => Action::Input(c),

        _ => Action::None,
    }
}

fn handle_help_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::F(1) => Action::CloseHelp,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::spinner::SpinnerConfig;
    use rstest::rstest;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn state() -> AppState {
        AppState::seeded(1, SpinnerConfig::default())
    }

    mod normal_mode {
        use super::*;

        #[rstest]
        #[case(KeyCode::Char('s'), KeyModifiers::CONTROL, Action::Spin)]
        #[case(KeyCode::Char('g'), KeyModifiers::CONTROL, Action::Expand)]
        #[case(KeyCode::Char('r'), KeyModifiers::CONTROL, Action::Reset)]
        #[case(KeyCode::Char('q'), KeyModifiers::CONTROL, Action::Quit)]
        #[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Action::Quit)]
        #[case(KeyCode::Esc, KeyModifiers::NONE, Action::StopSpin)]
        #[case(KeyCode::F(1), KeyModifiers::NONE, Action::ToggleHelp)]
        #[case(KeyCode::Tab, KeyModifiers::NONE, Action::FocusNext)]
        #[case(KeyCode::BackTab, KeyModifiers::SHIFT, Action::FocusPrev)]
        #[case(KeyCode::Char('q'), KeyModifiers::NONE, Action::Input('q'))]
        #[case(KeyCode::Char('Q'), KeyModifiers::SHIFT, Action::Input('Q'))]
        #[case(KeyCode::Backspace, KeyModifiers::NONE, Action::Backspace)]
        #[case(KeyCode::Home, KeyModifiers::NONE, Action::MoveCursor(CursorMove::Home))]
        #[case(KeyCode::Char('x'), KeyModifiers::ALT, Action::None)]
        fn maps_keys(
            #[case] code: KeyCode,
            #[case] modifiers: KeyModifiers,
            #[case] expected: Action,
        ) {
            let action = handle_event(key(code, modifiers), &state());

            assert_eq!(action, expected);
        }

        #[rstest]
        #[case(FocusedField::Candidates, Action::NewLine)]
        #[case(FocusedField::Count, Action::Expand)]
        fn enter_depends_on_focus(#[case] focused: FocusedField, #[case] expected: Action) {
            let mut state = state();
            state.focused_field = focused;

            let action = handle_event(key(KeyCode::Enter, KeyModifiers::NONE), &state);

            assert_eq!(action, expected);
        }

        #[test]
        fn paste_becomes_paste_action() {
            let action = handle_event(Event::Paste("a\nb".to_string()), &state());

            assert_eq!(action, Action::Paste("a\nb".to_string()));
        }
    }

    mod help_mode {
        use super::*;

        fn help_state() -> AppState {
            let mut state = state();
            state.input_mode = InputMode::Help;
            state
        }

        #[rstest]
        #[case(KeyCode::Esc, KeyModifiers::NONE, Action::CloseHelp)]
        #[case(KeyCode::F(1), KeyModifiers::NONE, Action::CloseHelp)]
        #[case(KeyCode::Char('q'), KeyModifiers::CONTROL, Action::Quit)]
        #[case(KeyCode::Char('s'), KeyModifiers::CONTROL, Action::None)]
        #[case(KeyCode::Char('a'), KeyModifiers::NONE, Action::None)]
        fn maps_keys(
            #[case] code: KeyCode,
            #[case] modifiers: KeyModifiers,
            #[case] expected: Action,
        ) {
            let action = handle_event(key(code, modifiers), &help_state());

            assert_eq!(action, expected);
        }

        #[test]
        fn paste_is_ignored() {
            let action = handle_event(Event::Paste("x".to_string()), &help_state());

            assert_eq!(action, Action::None);
        }
    }
}
