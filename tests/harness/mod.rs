pub mod fixtures;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use gacha::app::state::AppState;
use gacha::ui::components::layout::MainLayout;

pub const TEST_WIDTH: u16 = 120;
pub const TEST_HEIGHT: u16 = 30;

pub fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    Terminal::new(backend).unwrap()
}

const FIXED_TIME_MS: u128 = 0;

pub fn render_to_string(terminal: &mut Terminal<TestBackend>, state: &AppState) -> String {
    terminal
        .draw(|frame| {
            MainLayout::render(frame, state, Some(FIXED_TIME_MS));
        })
        .unwrap();

    buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        if y < buffer.area.height - 1 {
            result.push('\n');
        }
    }
    result
}
