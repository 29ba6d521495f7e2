//! Pure functions for calculating animation deadlines.
//!
//! These functions are I/O-free and deterministic, suitable for use in the app layer.
//! The UI layer uses the returned deadlines to schedule wake-ups.

use std::time::Instant;

use crate::state::AppState;

/// Calculates the next animation deadline based on the current state.
///
/// Returns `Some(Instant)` when a timer is armed and needs a timed update.
/// Returns `None` when nothing is pending (caller can wait indefinitely for input).
///
/// # Animation sources:
/// 1. Spinner: next frame or the spin deadline, whichever comes first
/// 2. Message timeout: Error/success messages with expiration
pub fn next_animation_deadline(state: &AppState, _now: Instant) -> Option<Instant> {
    let mut earliest: Option<Instant> = None;

    earliest = min_instant(earliest, state.spinner.next_wakeup());

    if let Some(expires_at) = state.messages.expires_at {
        earliest = min_instant(earliest, Some(expires_at));
    }

    earliest
}

/// Returns the earlier of two optional instants.
fn min_instant(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}
