use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::atoms::panel_block;
use crate::app::focused_field::FocusedField;
use crate::app::state::AppState;
use crate::theme::Theme;

pub struct CountField;

impl CountField {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focused_field == FocusedField::Count;
        let block = panel_block(FocusedField::Count.title(), focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let unique = state.candidate_list().unique_count();
        let line = Line::from(vec![
            Span::styled(
                state.count.as_str().to_string(),
                Style::default().fg(Theme::TEXT_PRIMARY),
            ),
            Span::raw("  "),
            Self::readiness(state.can_expand(), unique),
        ]);
        frame.render_widget(Paragraph::new(line), inner);

        if focused && inner.width > 0 && inner.height > 0 {
            let (_, col) = state.count.cursor_position();
            let col = (col as u16).min(inner.width - 1);
            frame.set_cursor_position(Position::new(inner.x + col, inner.y));
        }
    }

    fn readiness(ready: bool, unique: usize) -> Span<'static> {
        if ready {
            Span::styled("✓ ready to expand", Style::default().fg(Theme::STATUS_SUCCESS))
        } else if unique < 2 {
            Span::styled(
                "needs 2+ unique candidates",
                Style::default().fg(Theme::TEXT_MUTED),
            )
        } else {
            Span::styled(
                format!("min {unique}"),
                Style::default().fg(Theme::TEXT_MUTED),
            )
        }
    }
}
