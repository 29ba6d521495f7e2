//! Timed flicker-then-resolve selection.
//!
//! The spinner owns its two timers (next frame, deadline) as plain instants.
//! Dropping or replacing the pair is the cancellation: a restarted or stopped
//! run leaves nothing behind that could tick or resolve later. Time is always
//! passed in, so the state machine never reads the clock itself.

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::debug;

pub const DEFAULT_FRAME_RATE: u32 = 120;
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinnerConfig {
    /// Samples per second while running.
    pub frame_rate: u32,
    /// Wall-clock time until a running spinner resolves on its own.
    pub duration: Duration,
}

impl SpinnerConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            duration: DEFAULT_DURATION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerPhase {
    #[default]
    Idle,
    Running,
    Resolved,
}

/// Transitions reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinnerEvent {
    RunningChanged(bool),
    /// Winner frozen on stop or deadline; `None` if nothing was ever sampled.
    Resolved(Option<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timers {
    next_frame_at: Instant,
    deadline: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct Spinner {
    config: SpinnerConfig,
    phase: SpinnerPhase,
    displayed: Option<String>,
    winner: Option<String>,
    // Some iff phase == Running
    timers: Option<Timers>,
}

impl Spinner {
    pub fn new(config: SpinnerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> SpinnerConfig {
        self.config
    }

    pub fn phase(&self) -> SpinnerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == SpinnerPhase::Running
    }

    /// Most recent sample. Frozen once the spinner stops.
    pub fn displayed(&self) -> Option<&str> {
        self.displayed.as_deref()
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// Earliest armed timer, if running.
    pub fn next_wakeup(&self) -> Option<Instant> {
        self.timers
            .map(|timers| timers.next_frame_at.min(timers.deadline))
    }

    /// Arms a fresh run. A run already in progress is cancelled without
    /// resolving, and no second `RunningChanged(true)` is reported for it.
    pub fn start(&mut self, now: Instant) -> Vec<SpinnerEvent> {
        let was_running = self.timers.take().is_some();
        if was_running {
            debug!("restarting spinner, previous run cancelled");
        }

        self.timers = Some(Timers {
            next_frame_at: now + self.config.frame_interval(),
            deadline: now + self.config.duration,
        });
        self.phase = SpinnerPhase::Running;
        self.winner = None;

        if was_running {
            Vec::new()
        } else {
            vec![SpinnerEvent::RunningChanged(true)]
        }
    }

    /// Halts a running spinner, keeping the last sample as the winner.
    /// No-op when not running.
    pub fn stop(&mut self) -> Vec<SpinnerEvent> {
        if self.timers.take().is_none() {
            return Vec::new();
        }
        debug!("spinner stopped before deadline");
        self.resolve()
    }

    /// Back to Idle, forgetting the displayed value and winner.
    pub fn reset(&mut self) -> Vec<SpinnerEvent> {
        let was_running = self.timers.take().is_some();
        self.phase = SpinnerPhase::Idle;
        self.displayed = None;
        self.winner = None;

        if was_running {
            vec![SpinnerEvent::RunningChanged(false)]
        } else {
            Vec::new()
        }
    }

    /// Fires whatever timers are due at `now`. `candidates` is read fresh on
    /// every call so edits made mid-spin are honoured on the next frame.
    pub fn advance<R>(&mut self, now: Instant, candidates: &[String], rng: &mut R) -> Vec<SpinnerEvent>
    where
        R: Rng + ?Sized,
    {
        let Some(timers) = self.timers else {
            return Vec::new();
        };

        if timers.next_frame_at <= now && timers.next_frame_at <= timers.deadline {
            if let Some(choice) = sample(candidates, rng) {
                self.displayed = Some(choice.clone());
            }
            // Frames missed by a late wake-up are skipped, not replayed.
            self.timers = Some(Timers {
                next_frame_at: now + self.config.frame_interval(),
                ..timers
            });
        }

        if now >= timers.deadline {
            self.timers = None;
            return self.resolve();
        }

        Vec::new()
    }

    fn resolve(&mut self) -> Vec<SpinnerEvent> {
        self.phase = SpinnerPhase::Resolved;
        self.winner = self.displayed.clone();
        debug!(winner = ?self.winner, "spinner resolved");
        vec![
            SpinnerEvent::RunningChanged(false),
            SpinnerEvent::Resolved(self.winner.clone()),
        ]
    }
}

/// Uniform over positions, so repeated entries are proportionally likelier.
pub fn sample<'a, R>(candidates: &'a [String], rng: &mut R) -> Option<&'a String>
where
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return None;
    }
    candidates.get(rng.gen_range(0..candidates.len()))
}
