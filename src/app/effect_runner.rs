//! Executes side effects returned by the reducer.
//!
//! Notifications go out in the order the reducer emitted them. Any number of
//! `Render` effects in one batch collapse into a single draw, issued after the
//! notifications so observers never lag behind the screen.

use std::sync::Arc;

use color_eyre::eyre::Result;
use tracing::debug;

use crate::effect::Effect;
use crate::ports::{Renderer, SpinObserver};
use crate::state::AppState;

#[derive(Default)]
pub struct EffectRunner {
    observers: Vec<Arc<dyn SpinObserver>>,
}

impl EffectRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observer(mut self, observer: Arc<dyn SpinObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn run(
        &self,
        effects: Vec<Effect>,
        renderer: &mut dyn Renderer,
        state: &AppState,
    ) -> Result<()> {
        let mut needs_render = false;

        for effect in effects {
            match effect {
                Effect::Render => needs_render = true,
                Effect::NotifyRunningChange(running) => {
                    debug!(running, "notifying running change");
                    for observer in &self.observers {
                        observer.on_running_change(running);
                    }
                }
                Effect::NotifyResolved { winner } => {
                    for observer in &self.observers {
                        observer.on_resolved(winner.clone());
                    }
                }
            }
        }

        if needs_render {
            renderer.draw(state)?;
        }
        Ok(())
    }
}
