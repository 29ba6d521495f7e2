use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::candidates_editor::CandidatesEditor;
use super::count_field::CountField;
use super::footer::Footer;
use super::header::Header;
use super::help_overlay::HelpOverlay;
use super::roller::Roller;
use crate::app::input_mode::InputMode;
use crate::app::state::AppState;

pub struct MainLayout;

impl MainLayout {
    /// `time_ms` pins the header spinner frame; `None` reads the wall clock.
    pub fn render(frame: &mut Frame, state: &AppState, time_ms: Option<u128>) {
        let time_ms = time_ms.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0)
        });
        let area = frame.area();

        let [header_area, main_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .areas(area);

        Header::render(frame, header_area, state, time_ms);

        let [left_area, right_area] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(main_area);

        let [candidates_area, count_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).areas(left_area);

        CandidatesEditor::render(frame, candidates_area, state);
        CountField::render(frame, count_area, state);
        Roller::render(frame, right_area, state);

        Footer::render(frame, footer_area, state);

        // Render overlays (on top of everything else)
        if state.input_mode == InputMode::Help {
            HelpOverlay::render(frame);
        }
    }
}
