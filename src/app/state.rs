use std::time::Instant;

use rand::RngCore;

use super::config::AppConfig;
use super::focused_field::FocusedField;
use super::input_mode::InputMode;
use super::message_state::MessageState;
use super::spinner::{Spinner, SpinnerEvent};
use super::text_field::TextField;
use crate::domain::{CandidateList, can_expand};

/// Count field accepts at most this many digits.
pub const MAX_COUNT_DIGITS: usize = 4;

pub struct AppState {
    pub should_quit: bool,
    pub render_dirty: bool,

    pub candidates: TextField,
    pub count: TextField,
    pub focused_field: FocusedField,
    pub input_mode: InputMode,

    pub spinner: Spinner,
    pub messages: MessageState,

    pub terminal_size: (u16, u16),

    rng: Box<dyn RngCore + Send>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            should_quit: false,
            render_dirty: true,
            candidates: TextField::new(),
            count: TextField::with_max_chars(MAX_COUNT_DIGITS),
            focused_field: FocusedField::default(),
            input_mode: InputMode::default(),
            spinner: Spinner::new(config.spinner),
            messages: MessageState::default(),
            terminal_size: (0, 0),
            rng: config.make_rng(),
        }
    }

    /// Derived from the editor text on every call; never cached.
    pub fn candidate_list(&self) -> CandidateList {
        CandidateList::parse(self.candidates.as_str())
    }

    pub fn set_candidates(&mut self, list: &CandidateList) {
        self.candidates.set_text(list.to_text());
    }

    /// Count field value; an empty field means 0.
    pub fn requested_count(&self) -> usize {
        self.count.as_str().parse().unwrap_or(0)
    }

    pub fn can_expand(&self) -> bool {
        can_expand(self.candidate_list().unique_count(), self.requested_count())
    }

    pub fn rng_mut(&mut self) -> &mut (dyn RngCore + Send) {
        self.rng.as_mut()
    }

    pub fn focused_text_mut(&mut self) -> &mut TextField {
        match self.focused_field {
            FocusedField::Candidates => &mut self.candidates,
            FocusedField::Count => &mut self.count,
        }
    }

    /// Fires due spinner timers against the current candidate list.
    pub fn advance_spinner(&mut self, now: Instant) -> Vec<SpinnerEvent> {
        let list = self.candidate_list();
        self.spinner.advance(now, list.as_slice(), self.rng.as_mut())
    }

    pub fn set_error(&mut self, msg: String, now: Instant) {
        self.messages.set_error_at(msg, now);
    }

    pub fn set_success(&mut self, msg: String, now: Instant) {
        self.messages.set_success_at(msg, now);
    }

    pub fn clear_expired_timers(&mut self, now: Instant) {
        self.messages.clear_expired_at(now);
    }

    pub fn mark_dirty(&mut self) {
        self.render_dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.render_dirty = false;
    }
}

#[cfg(any(test, feature = "test-support"))]
impl AppState {
    /// Deterministic state for tests: fixed seed, given spinner timing.
    pub fn seeded(seed: u32, spinner: super::spinner::SpinnerConfig) -> Self {
        Self::new(&AppConfig {
            spinner,
            seed: Some(seed),
        })
    }
}
