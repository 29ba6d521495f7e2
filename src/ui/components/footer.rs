use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::molecules::hint_line;
use super::status_message::StatusMessage;
use crate::app::focused_field::FocusedField;
use crate::app::input_mode::InputMode;
use crate::app::keybindings::{EDITOR_KEYS, GLOBAL_KEYS, HELP_KEYS, idx};
use crate::app::message_state::MessageKind;
use crate::app::state::AppState;
use crate::theme::Theme;

pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let line = match state.messages.current() {
            Some(message) if message.kind == MessageKind::Error => {
                StatusMessage::render_line(&message.text, MessageKind::Error)
            }
            _ => {
                let hints = Self::get_context_hints(state);
                Self::build_hint_line_with_success(&hints, state.messages.last_success())
            }
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    /// Hint ordering: Actions → Editing → Help → Quit
    pub fn get_context_hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
        match state.input_mode {
            InputMode::Normal => {
                let spin = if state.spinner.is_running() {
                    GLOBAL_KEYS[idx::global::STOP].as_hint()
                } else {
                    GLOBAL_KEYS[idx::global::SPIN].as_hint()
                };
                let enter = match state.focused_field {
                    FocusedField::Candidates => EDITOR_KEYS[idx::editor::NEW_LINE].as_hint(),
                    FocusedField::Count => EDITOR_KEYS[idx::editor::COUNT_ENTER].as_hint(),
                };
                vec![
                    spin,
                    GLOBAL_KEYS[idx::global::EXPAND].as_hint(),
                    GLOBAL_KEYS[idx::global::RESET].as_hint(),
                    enter,
                    GLOBAL_KEYS[idx::global::FOCUS].as_hint(),
                    GLOBAL_KEYS[idx::global::HELP].as_hint(),
                    GLOBAL_KEYS[idx::global::QUIT].as_hint(),
                ]
            }
            InputMode::Help => vec![
                HELP_KEYS[idx::help::CLOSE].as_hint(),
                HELP_KEYS[idx::help::QUIT].as_hint(),
            ],
        }
    }

    fn build_hint_line_with_success(
        hints: &[(&'static str, &'static str)],
        success: Option<&str>,
    ) -> Line<'static> {
        let mut line = hint_line(hints);
        if let Some(msg) = success {
            line.spans.push(Span::raw("  "));
            line.spans.push(Span::styled(
                format!("✓ {msg}"),
                Style::default().fg(Theme::STATUS_SUCCESS),
            ));
        }
        line
    }
}
