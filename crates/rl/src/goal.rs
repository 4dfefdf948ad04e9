//! Passive trigger regions.
//!
//! Detectors hold no per-agent data. When the physics side reports that
//! something entered their volume they forward the event to that entity if,
//! and only if, it can be rewarded.

use crate::agent::AgentController;
use crate::episode::Termination;
use crate::sink::StatsSink;

/// Capability of anything that can receive the terminal rewards.
pub trait Rewardable {
    fn give_points(&mut self) -> Option<Termination>;
    fn take_away_points(&mut self) -> Option<Termination>;
}

impl<S: StatsSink> Rewardable for AgentController<S> {
    fn give_points(&mut self) -> Option<Termination> {
        AgentController::give_points(self)
    }

    fn take_away_points(&mut self) -> Option<Termination> {
        AgentController::take_away_points(self)
    }
}

/// The far side of the road.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoalDetector;

impl GoalDetector {
    /// Handle one enter event. `other` is `None` for entities without the
    /// reward capability, which are ignored.
    pub fn on_trigger_enter(&self, other: Option<&mut dyn Rewardable>) -> Option<Termination> {
        let agent = other?;
        tracing::debug!("Points earned as road was crossed");
        agent.give_points()
    }
}

/// A region that ends the episode as a failure (traffic lane, off-path area).
#[derive(Debug, Default, Clone, Copy)]
pub struct HazardDetector;

impl HazardDetector {
    pub fn on_trigger_enter(&self, other: Option<&mut dyn Rewardable>) -> Option<Termination> {
        let agent = other?;
        tracing::debug!("hazard entered");
        agent.take_away_points()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        gives: u32,
        takes: u32,
    }

    impl Rewardable for Counter {
        fn give_points(&mut self) -> Option<Termination> {
            self.gives += 1;
            Some(Termination::Success)
        }

        fn take_away_points(&mut self) -> Option<Termination> {
            self.takes += 1;
            Some(Termination::Failure)
        }
    }

    #[test]
    fn goal_forwards_once_per_enter() {
        let mut c = Counter::default();
        assert_eq!(GoalDetector.on_trigger_enter(Some(&mut c)), Some(Termination::Success));
        assert_eq!(c.gives, 1);
        assert_eq!(c.takes, 0);
    }

    #[test]
    fn non_agent_overlap_is_noop() {
        assert_eq!(GoalDetector.on_trigger_enter(None), None);
        assert_eq!(HazardDetector.on_trigger_enter(None), None);
    }

    #[test]
    fn hazard_takes_points() {
        let mut c = Counter::default();
        HazardDetector.on_trigger_enter(Some(&mut c));
        assert_eq!(c.takes, 1);
    }
}
