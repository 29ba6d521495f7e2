use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::app::message_state::MessageKind;
use crate::theme::Theme;

pub struct StatusMessage;

impl StatusMessage {
    pub fn render_line(message: &str, kind: MessageKind) -> Line<'static> {
        let (prefix, color) = match kind {
            MessageKind::Error => ("✗ ", Theme::STATUS_ERROR),
            MessageKind::Success => ("✓ ", Theme::STATUS_SUCCESS),
        };

        Line::from(vec![Span::styled(
            format!("{prefix}{message}"),
            Style::default().fg(color),
        )])
    }
}
