use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::molecules::chip_hint_line;
use super::overlay::{centered_rect, clear_area};
use crate::app::keybindings::{EDITOR_KEYS, GLOBAL_KEYS, HELP_KEYS, KeyBinding};
use crate::theme::Theme;

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame) {
        let area = centered_rect(
            frame.area(),
            Constraint::Percentage(70),
            Constraint::Percentage(80),
        );

        clear_area(frame, area);

        let block = Block::default()
            .title(" Help (press Esc or F1 to close) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::FOCUS_BORDER))
            .style(Style::default().bg(Theme::MODAL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut help_lines = Vec::new();
        Self::section(&mut help_lines, "Roller", GLOBAL_KEYS);
        Self::section(&mut help_lines, "Editing", EDITOR_KEYS);
        Self::section(&mut help_lines, "Help", HELP_KEYS);

        let help = Paragraph::new(help_lines)
            .wrap(Wrap { trim: false })
            .style(Style::default().bg(Theme::MODAL_BG));

        frame.render_widget(help, inner);
    }

    fn section(lines: &mut Vec<Line<'static>>, title: &str, keys: &[KeyBinding]) {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![Span::styled(
            format!("=== {title} ==="),
            Style::default()
                .fg(Theme::SECTION_HEADER)
                .add_modifier(Modifier::BOLD),
        )]));
        lines.push(Line::from(""));
        lines.extend(keys.iter().map(|kb| chip_hint_line(kb.key, kb.description)));
    }
}
