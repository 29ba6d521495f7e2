use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use super::atoms::panel_block;
use crate::app::focused_field::FocusedField;
use crate::app::state::AppState;
use crate::theme::Theme;

const PLACEHOLDER: &str = "One candidate per line";

pub struct CandidatesEditor;

impl CandidatesEditor {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focused_field == FocusedField::Candidates;
        let block = panel_block(FocusedField::Candidates.title(), focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let field = &state.candidates;
        let (cursor_line, cursor_col) = field.cursor_position();
        let scroll = Self::scroll_offset(cursor_line, inner.height);

        let paragraph = if field.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Theme::TEXT_MUTED))
        } else {
            Paragraph::new(field.as_str())
                .style(Style::default().fg(Theme::TEXT_PRIMARY))
                .scroll((scroll, 0))
        };
        frame.render_widget(paragraph, inner);

        if focused && inner.width > 0 && inner.height > 0 {
            let row = (cursor_line as u16).saturating_sub(scroll);
            let col = (cursor_col as u16).min(inner.width - 1);
            frame.set_cursor_position(Position::new(inner.x + col, inner.y + row));
        }
    }

    /// First visible line so the cursor line stays inside `height` rows.
    fn scroll_offset(cursor_line: usize, height: u16) -> u16 {
        let cursor_line = cursor_line as u16;
        if height == 0 {
            return cursor_line;
        }
        cursor_line.saturating_sub(height - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 5, 0)]
    #[case(4, 5, 0)]
    #[case(5, 5, 1)]
    #[case(12, 5, 8)]
    #[case(3, 0, 3)]
    fn scroll_keeps_cursor_visible(
        #[case] cursor_line: usize,
        #[case] height: u16,
        #[case] expected: u16,
    ) {
        assert_eq!(CandidatesEditor::scroll_offset(cursor_line, height), expected);
    }
}
