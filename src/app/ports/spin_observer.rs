/// Receives spinner transitions after the reducer has applied them.
#[cfg_attr(test, mockall::automock)]
pub trait SpinObserver: Send + Sync {
    fn on_running_change(&self, running: bool);

    /// Called once per run, on stop or when the deadline passes.
    fn on_resolved(&self, winner: Option<String>);
}
