use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use super::atoms::panel_block_highlight;
use crate::app::spinner::SpinnerPhase;
use crate::app::state::AppState;
use crate::theme::Theme;

pub const RUNNING_TEXT: &str = "⏳ The truth is truthing your life decision...";
pub const WINNER_TEXT: &str = "🎉 We have a winner!";
pub const IDLE_TEXT: &str = "🔮 Press Ctrl+S to spin";
pub const EMPTY_TEXT: &str = "Add items to start";

pub struct Roller;

impl Roller {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let has_winner = state.spinner.winner().is_some();
        let block = panel_block_highlight(" Roller ", false, has_winner);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [status_area, _, display_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        let (status, color) = Self::status(state);
        frame.render_widget(
            Paragraph::new(Line::styled(status, Style::default().fg(color)))
                .alignment(Alignment::Center),
            status_area,
        );

        let list = state.candidate_list();
        let (text, style) = match state.spinner.displayed().or_else(|| list.first()) {
            Some(text) => (
                text.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            None => (
                EMPTY_TEXT.to_string(),
                Style::default().fg(Theme::TEXT_MUTED),
            ),
        };

        // Vertically center the candidate inside the remaining space
        let pad = display_area.height.saturating_sub(1) / 2;
        let [_, text_area] =
            Layout::vertical([Constraint::Length(pad), Constraint::Min(1)]).areas(display_area);

        frame.render_widget(
            Paragraph::new(Line::styled(text, style))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            text_area,
        );
    }

    pub fn status(state: &AppState) -> (&'static str, ratatui::style::Color) {
        match state.spinner.phase() {
            SpinnerPhase::Running => (RUNNING_TEXT, Theme::ROLLER_RUNNING),
            SpinnerPhase::Resolved if state.spinner.winner().is_some() => {
                (WINNER_TEXT, Theme::ROLLER_WINNER)
            }
            SpinnerPhase::Resolved | SpinnerPhase::Idle => (IDLE_TEXT, Theme::ROLLER_IDLE),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::app::spinner::SpinnerConfig;

    fn state() -> AppState {
        let mut state = AppState::seeded(
            1,
            SpinnerConfig {
                frame_rate: 10,
                duration: Duration::from_millis(100),
            },
        );
        state.candidates.set_text("A\nB");
        state
    }

    #[test]
    fn idle_prompts_to_spin() {
        assert_eq!(Roller::status(&state()).0, IDLE_TEXT);
    }

    #[test]
    fn running_shows_truthing_text() {
        let mut state = state();
        state.spinner.start(Instant::now());

        assert_eq!(Roller::status(&state).0, RUNNING_TEXT);
    }

    #[test]
    fn resolved_with_winner_celebrates() {
        let mut state = state();
        let now = Instant::now();
        state.spinner.start(now);
        state.advance_spinner(now + Duration::from_millis(100));

        assert_eq!(Roller::status(&state).0, WINNER_TEXT);
    }

    #[test]
    fn stopped_without_sample_prompts_again() {
        let mut state = state();
        state.spinner.start(Instant::now());
        state.spinner.stop();

        assert_eq!(Roller::status(&state).0, IDLE_TEXT);
    }
}
