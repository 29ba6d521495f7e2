//! Candidate list sub-reducer: expansion and de-duplication.

use std::time::Instant;

use tracing::{info, warn};

use crate::action::Action;
use crate::effect::Effect;
use crate::reducers::spinner_effects;
use crate::state::AppState;
use crate::domain::{CandidateList, ExpandError, can_expand, expand};

/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_candidates(
    state: &mut AppState,
    action: &Action,
    now: Instant,
) -> Option<Vec<Effect>> {
    match action {
        Action::Expand => {
            let list = state.candidate_list();
            let unique = list.unique_count();
            let requested = state.requested_count();

            if !can_expand(unique, requested) {
                let msg = if unique < 2 {
                    "Need at least 2 unique candidates to expand".to_string()
                } else {
                    ExpandError::InvalidCount { requested, unique }.to_string()
                };
                state.set_error(msg, now);
                return Some(vec![]);
            }

            match expand(list.as_slice(), requested, state.rng_mut()) {
                Ok(items) => {
                    info!(unique, requested, "expanded candidate list");
                    state.set_candidates(&CandidateList::from(items));
                    state.set_success(format!("Expanded to {requested} candidates"), now);
                }
                Err(e) => {
                    warn!(error = %e, "expansion rejected");
                    state.set_error(e.to_string(), now);
                }
            }
            Some(vec![])
        }
        Action::Reset => {
            let unique = state.candidate_list().unique();
            state.set_candidates(&CandidateList::from(unique));
            let events = state.spinner.reset();
            Some(spinner_effects(events))
        }
        _ => None,
    }
}
