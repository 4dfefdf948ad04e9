use thiserror::Error;

/// Invalid static configuration, detected when an agent is built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("speed must be finite and positive, got {0}")]
    Speed(f32),
    #[error("step amount must be finite and positive, got {0}")]
    StepAmount(f32),
    #[error("feedback duration must be finite and non-negative, got {0}")]
    FeedbackDuration(f32),
    #[error("crosswalk bounds are inverted: min {min:?} max {max:?}")]
    InvertedBounds { min: [f32; 3], max: [f32; 3] },
    #[error("episode cap must be at least 1")]
    ZeroEpisodeCap,
    #[error("max steps must be at least 1")]
    ZeroMaxSteps,
    #[error("an episode cap needs external episode restarts, but the agent resets itself")]
    CapWithSelfReset,
}

/// Fatal construction failures. An agent that hits one of these cannot run.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("invalid agent configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("no goal region found for the agent")]
    MissingGoal,
    #[error("agent has no body in the physics world")]
    MissingBody(#[source] physics::PhysicsError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyScriptError {
    #[error("unknown key {key:?} in frame {frame}")]
    UnknownKey { frame: usize, key: String },
}
