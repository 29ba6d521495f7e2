use std::time::{Duration, Instant};

use gacha::app::spinner::SpinnerConfig;
use gacha::app::state::AppState;

pub const FRAME_RATE: u32 = 10;
pub const SPIN_DURATION: Duration = Duration::from_millis(100);

/// Fast, seeded spinner so a whole run fits in a few ticks.
pub fn seeded_state(candidates: &str) -> AppState {
    let mut state = AppState::seeded(
        130_725,
        SpinnerConfig {
            frame_rate: FRAME_RATE,
            duration: SPIN_DURATION,
        },
    );
    state.candidates.set_text(candidates);
    state
}

pub fn fixed_instant() -> Instant {
    Instant::now()
}
