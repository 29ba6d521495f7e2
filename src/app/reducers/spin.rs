//! Spinner sub-reducer: start/stop and timer ticks.

use std::time::Instant;

use tracing::info;

use crate::action::Action;
use crate::effect::Effect;
use crate::spinner::SpinnerEvent;
use crate::state::AppState;

/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_spin(state: &mut AppState, action: &Action, now: Instant) -> Option<Vec<Effect>> {
    match action {
        Action::Spin => {
            let count = state.candidate_list().len();
            info!(candidates = count, "spin started");
            let events = state.spinner.start(now);
            Some(spinner_effects(events))
        }
        Action::StopSpin => {
            let events = state.spinner.stop();
            Some(spinner_effects(events))
        }
        Action::Tick => {
            state.clear_expired_timers(now);
            let events = state.advance_spinner(now);
            Some(spinner_effects(events))
        }
        _ => None,
    }
}

/// Maps spinner transitions onto observer notifications.
pub fn spinner_effects(events: Vec<SpinnerEvent>) -> Vec<Effect> {
    events
        .into_iter()
        .map(|event| match event {
            SpinnerEvent::RunningChanged(running) => Effect::NotifyRunningChange(running),
            SpinnerEvent::Resolved(winner) => Effect::NotifyResolved { winner },
        })
        .collect()
}
