use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::atoms::spinner_char;
use crate::app::spinner::SpinnerPhase;
use crate::app::state::AppState;
use crate::theme::Theme;

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState, time_ms: u128) {
        let list = state.candidate_list();

        let (status_text, status_color) = match state.spinner.phase() {
            SpinnerPhase::Running => (
                format!("{} spinning", spinner_char(time_ms)),
                Theme::ROLLER_RUNNING,
            ),
            SpinnerPhase::Resolved => ("resolved".to_string(), Theme::ROLLER_WINNER),
            SpinnerPhase::Idle => ("idle".to_string(), Theme::TEXT_MUTED),
        };

        let line = Line::from(vec![
            Span::styled(
                "gacha",
                Style::default()
                    .fg(Theme::SECTION_HEADER)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::raw(format!("{} candidates", list.len())),
            Span::styled(
                format!(" ({} unique)", list.unique_count()),
                Style::default().fg(Theme::TEXT_SECONDARY),
            ),
            Span::raw(" | "),
            Span::styled(status_text, Style::default().fg(status_color)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
