//! Transient visual feedback.
//!
//! A flash is a named effect that stays active for a fixed duration. It is
//! advanced by the same tick that drives motion but shares no state with the
//! move state machine; nothing ever waits for a flash to finish. Starting a
//! new flash while one is pending cancels the pending one.

use crate::episode::Termination;

#[derive(Clone, Debug, PartialEq)]
pub struct Flash {
    pub cause: Termination,
    /// Effect name taken from the agent configuration.
    pub effect: String,
    pub remaining: f32,
}

#[derive(Clone, Debug, Default)]
pub struct FlashFeedback {
    active: Option<Flash>,
}

impl FlashFeedback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a flash. Returns the flash it cancelled, if any.
    pub fn trigger(&mut self, cause: Termination, effect: &str, duration: f32) -> Option<Flash> {
        let replaced = self.active.replace(Flash {
            cause,
            effect: effect.to_owned(),
            remaining: duration,
        });
        if let Some(old) = &replaced {
            tracing::debug!(effect = %old.effect, "flash cancelled by newer flash");
        }
        replaced
    }

    /// Advance the timer. Returns the flash that expired during this call.
    pub fn advance(&mut self, dt: f32) -> Option<Flash> {
        let flash = self.active.as_mut()?;
        flash.remaining -= dt.max(0.0);
        if flash.remaining <= 0.0 {
            return self.active.take();
        }
        None
    }

    #[must_use]
    pub fn active(&self) -> Option<&Flash> {
        self.active.as_ref()
    }
}
