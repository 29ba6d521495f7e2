//! Side effects returned by the reducer, executed by EffectRunner.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Render,

    /// Spinner entered or left the running state
    NotifyRunningChange(bool),

    /// Spinner froze on a winner (stop or deadline)
    NotifyResolved { winner: Option<String> },
}

impl Effect {
    pub fn is_render(&self) -> bool {
        matches!(self, Effect::Render)
    }

    pub fn is_notification(&self) -> bool {
        matches!(
            self,
            Effect::NotifyRunningChange(_) | Effect::NotifyResolved { .. }
        )
    }
}
