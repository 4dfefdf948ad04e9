//! Static agent configuration, loaded once at construction.

use physics::{BoundingBox, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Reward added when the goal region is reached.
pub const SUCCESS_REWARD: f32 = 1.0;
/// Reward added when the failure entry point fires.
pub const FAILURE_REWARD: f32 = -0.025;
/// Reward added when a move would leave the crosswalk.
pub const BOUNDARY_PENALTY: f32 = -0.1;
/// Episode cap used by the road-crossing preset.
pub const DEFAULT_EPISODE_CAP: u32 = 100;

/// Who restarts an episode after a success or failure.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetPolicy {
    /// The episode ends and waits for the driver to call `begin_episode`.
    #[default]
    External,
    /// The agent resets and starts its next episode in the same call.
    SelfReset,
}

/// Inclusive crosswalk limits. Only `x` and `z` are checked.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Crosswalk {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl Crosswalk {
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min: min.to_array(), max: max.to_array() }
    }

    #[must_use]
    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= self.min[0] && p.x <= self.max[0] && p.z >= self.min[2] && p.z <= self.max[2]
    }

    #[must_use]
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.min.into(), self.max.into())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Interpolation rate in units per second.
    pub speed: f32,
    /// Offset applied per discrete step.
    pub step_amount: f32,
    /// Name of the effect flashed on success.
    pub success_effect: String,
    /// Name of the effect flashed on failure.
    pub failure_effect: String,
    /// Seconds a flash stays active.
    pub feedback_duration: f32,
    pub crosswalk: Option<Crosswalk>,
    pub reset_policy: ResetPolicy,
    /// Completed episodes after which `begin_episode` refuses to start another.
    pub episode_cap: Option<u32>,
    /// Decision steps after which an episode is interrupted without reward.
    pub max_steps: Option<u32>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            speed: 50.0,
            step_amount: 1.0,
            success_effect: "success".to_owned(),
            failure_effect: "failure".to_owned(),
            feedback_duration: 0.5,
            crosswalk: None,
            reset_policy: ResetPolicy::External,
            episode_cap: None,
            max_steps: None,
        }
    }
}

impl AgentConfig {
    /// Road crossing: driver-restarted episodes, stops after 100 of them.
    #[must_use]
    pub fn cross_the_road() -> Self {
        Self {
            episode_cap: Some(DEFAULT_EPISODE_CAP),
            ..Self::default()
        }
    }

    /// Footpath walk: self-resetting, confined to a crosswalk.
    #[must_use]
    pub fn footpath_walk(crosswalk: Crosswalk) -> Self {
        Self {
            crosswalk: Some(crosswalk),
            reset_policy: ResetPolicy::SelfReset,
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(ConfigError::Speed(self.speed));
        }
        if !(self.step_amount.is_finite() && self.step_amount > 0.0) {
            return Err(ConfigError::StepAmount(self.step_amount));
        }
        if !(self.feedback_duration.is_finite() && self.feedback_duration >= 0.0) {
            return Err(ConfigError::FeedbackDuration(self.feedback_duration));
        }
        if let Some(cw) = &self.crosswalk {
            if !cw.bounds().is_ordered() {
                return Err(ConfigError::InvertedBounds { min: cw.min, max: cw.max });
            }
        }
        if self.episode_cap == Some(0) {
            return Err(ConfigError::ZeroEpisodeCap);
        }
        if self.max_steps == Some(0) {
            return Err(ConfigError::ZeroMaxSteps);
        }
        // The cap is enforced in `begin_episode`, which a self-resetting agent never needs.
        if self.episode_cap.is_some() && self.reset_policy == ResetPolicy::SelfReset {
            return Err(ConfigError::CapWithSelfReset);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        assert!(AgentConfig::cross_the_road().validate().is_ok());
        let cw = Crosswalk::new(Vec3::new(-2.0, 0.0, -2.0), Vec3::new(2.0, 0.0, 2.0));
        assert!(AgentConfig::footpath_walk(cw).validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let cfg = AgentConfig { speed: 0.0, ..AgentConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::Speed(0.0)));

        let cfg = AgentConfig { step_amount: f32::NAN, ..AgentConfig::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::StepAmount(_))));

        let cfg = AgentConfig { episode_cap: Some(0), ..AgentConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroEpisodeCap));

        let cw = Crosswalk::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(-2.0, 0.0, 0.0));
        let cfg = AgentConfig::footpath_walk(cw);
        assert!(matches!(cfg.validate(), Err(ConfigError::InvertedBounds { .. })));
    }

    #[test]
    fn episode_cap_requires_external_reset() {
        let cw = Crosswalk::new(Vec3::new(-2.0, 0.0, -2.0), Vec3::new(2.0, 0.0, 2.0));
        let cfg = AgentConfig { episode_cap: Some(1), ..AgentConfig::footpath_walk(cw) };
        assert_eq!(cfg.validate(), Err(ConfigError::CapWithSelfReset));

        let cfg = AgentConfig { reset_policy: ResetPolicy::External, ..cfg };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn crosswalk_ignores_height() {
        let cw = Crosswalk::new(Vec3::new(-2.0, 0.0, -2.0), Vec3::new(2.0, 0.0, 2.0));
        assert!(cw.contains(Vec3::new(2.0, 7.0, -2.0)));
        assert!(!cw.contains(Vec3::new(3.0, 0.0, 0.0)));
    }
}
