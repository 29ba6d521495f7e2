//! Pure reducer: state transitions only, no I/O.
//!
//! # Purity Rules
//!
//! The reducer MUST NOT:
//! - Call `Instant::now()` (time is passed as `now` parameter)
//! - Perform I/O operations
//! - Spawn async tasks
//!
//! Randomness comes from the RNG owned by `AppState`, so a seeded state
//! replays identically.

use std::time::Instant;

use crate::action::Action;
use crate::effect::Effect;
use crate::reducers::{reduce_candidates, reduce_editor, reduce_modal, reduce_spin};
use crate::state::AppState;

pub fn reduce(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    // Mark dirty for all state-changing actions (except None and Render)
    let should_mark_dirty = !matches!(action, Action::None | Action::Render);

    let effects = reduce_inner(state, action, now);

    if should_mark_dirty {
        state.mark_dirty();
    }

    effects
}

fn reduce_inner(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    if let Some(effects) = reduce_modal(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_spin(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_candidates(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_editor(state, &action, now) {
        return effects;
    }

    match action {
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::Resize(w, h) => {
            state.terminal_size = (w, h);
            vec![]
        }
        Action::Render => {
            state.clear_expired_timers(now);
            state.clear_dirty();
            vec![Effect::Render]
        }
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spinner::SpinnerConfig;

    fn state() -> AppState {
        AppState::seeded(1, SpinnerConfig::default())
    }

    #[test]
    fn quit_sets_flag() {
        let mut state = state();

        reduce(&mut state, Action::Quit, Instant::now());

        assert!(state.should_quit);
    }

    #[test]
    fn render_clears_dirty_and_requests_draw() {
        let mut state = state();
        state.mark_dirty();

        let effects = reduce(&mut state, Action::Render, Instant::now());

        assert_eq!(effects, vec![Effect::Render]);
        assert!(!state.render_dirty);
    }

    #[test]
    fn none_does_not_mark_dirty() {
        let mut state = state();
        state.clear_dirty();

        let effects = reduce(&mut state, Action::None, Instant::now());

        assert!(effects.is_empty());
        assert!(!state.render_dirty);
    }

    #[test]
    fn resize_records_terminal_size() {
        let mut state = state();

        reduce(&mut state, Action::Resize(100, 40), Instant::now());

        assert_eq!(state.terminal_size, (100, 40));
        assert!(state.render_dirty);
    }
}
