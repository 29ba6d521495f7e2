use tracing::info;

use crate::app::ports::SpinObserver;

/// Writes spinner transitions to the session log.
#[derive(Debug, Default)]
pub struct TracingSpinObserver;

impl SpinObserver for TracingSpinObserver {
    fn on_running_change(&self, running: bool) {
        info!(running, "spinner running state changed");
    }

    fn on_resolved(&self, winner: Option<String>) {
        match winner {
            Some(winner) => info!(%winner, "spinner resolved"),
            None => info!("spinner resolved without a candidate"),
        }
    }
}
