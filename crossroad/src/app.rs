//! # Crossroad Application Logic
//!
//! Drives a [`Crossing`] at a fixed tick rate the way an engine would:
//! every tick advances motion and trigger detection, and every
//! `decision_period` ticks the policy is asked for an action. Episodes that
//! end and wait for a restart are begun again on the next tick.
//!
//! The loop stops when the agent's episode cap is reached or after
//! `max_ticks` ticks, whichever comes first.

use std::path::PathBuf;

use anyhow::{Context, Result};
use rl::{
    AgentConfig, Crossing, EpisodeStart, EpisodeStats, KeyScript, LogSink, Policy, RandomPolicy,
    ResetPolicy, Scoreboard, StatsSink,
};
use scene::SceneDef;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Driver-restarted episodes with an episode cap, logged outcomes.
    Road,
    /// Self-resetting agent on a crosswalk, scoreboard outcomes.
    Footpath,
}

#[derive(Clone, Debug)]
pub enum PolicyChoice {
    Random { seed: Option<u64> },
    Keys(String),
}

#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Scene file; the variant's built-in scene when `None`.
    pub scene: Option<PathBuf>,
    pub variant: Variant,
    pub policy: PolicyChoice,
    pub dt: f32,
    pub decision_period: u32,
    pub max_ticks: u64,
    /// Overrides the episode cap.
    pub episodes: Option<u32>,
    /// Overrides the per-episode step limit.
    pub max_steps: Option<u32>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            scene: None,
            variant: Variant::Road,
            policy: PolicyChoice::Random { seed: None },
            dt: 0.02,
            decision_period: 5,
            max_ticks: 100_000,
            episodes: None,
            max_steps: None,
        }
    }
}

/// Why the loop stopped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RunEnd {
    /// The episode cap was hit; the process is expected to exit.
    CapReached(EpisodeStats),
    TickLimit(EpisodeStats),
}

/// Run the simulation loop described by `opts`.
///
/// # Errors
///
/// Returns an error when the scene cannot be loaded or bound, or when the
/// key script is malformed.
pub fn run(opts: &RunOptions) -> Result<RunEnd> {
    let scene = match &opts.scene {
        Some(path) => SceneDef::from_path(path)?,
        None => match opts.variant {
            Variant::Road => SceneDef::road(),
            Variant::Footpath => SceneDef::footpath(),
        },
    };

    let mut config: AgentConfig = scene.config.clone();
    if let Some(cap) = opts.episodes {
        config.episode_cap = Some(cap);
    }
    if let Some(max) = opts.max_steps {
        config.max_steps = Some(max);
    }

    let sink: Box<dyn StatsSink> = match config.reset_policy {
        ResetPolicy::External => Box::new(LogSink),
        ResetPolicy::SelfReset => Box::new(Scoreboard::default()),
    };
    let mut crossing = scene.into_crossing_with(config, sink)?;

    let mut policy: Box<dyn Policy> = match &opts.policy {
        PolicyChoice::Random { seed } => Box::new(RandomPolicy::new(*seed)),
        PolicyChoice::Keys(script) => {
            Box::new(KeyScript::parse(script).context("parsing key script")?)
        }
    };

    tracing::info!(
        "Starting simulation loop for up to {} ticks with dt = {}...",
        opts.max_ticks,
        opts.dt
    );
    let end = drive(&mut crossing, policy.as_mut(), opts);
    let stats = match end {
        RunEnd::CapReached(s) | RunEnd::TickLimit(s) => s,
    };
    tracing::info!(
        successes = stats.successes,
        failures = stats.failures,
        interruptions = stats.interruptions,
        episodes = stats.completed_episodes,
        "Cumulative Reward: {:.2}, Total Steps: {}",
        stats.cumulative_reward,
        stats.cumulative_steps
    );
    Ok(end)
}

fn drive<S: StatsSink>(crossing: &mut Crossing<S>, policy: &mut dyn Policy, opts: &RunOptions) -> RunEnd {
    let period = u64::from(opts.decision_period.max(1));

    if let EpisodeStart::CapReached(stats) = crossing.begin_episode() {
        return RunEnd::CapReached(stats);
    }

    for tick in 0..opts.max_ticks {
        if crossing.awaiting_begin() {
            if let EpisodeStart::CapReached(stats) = crossing.begin_episode() {
                return RunEnd::CapReached(stats);
            }
        }

        if tick % period == 0 {
            let obs = crossing.observe();
            let action = policy.act(&obs);
            let outcome = crossing.decide(action);
            tracing::trace!(tick, action, ?outcome, "decision");
        }

        crossing.tick(opts.dt);

        if (tick + 1) % 5000 == 0 {
            let s = crossing.agent().stats();
            tracing::info!(
                "Simulation tick {} complete. Episodes: {}, successes: {}, failures: {}",
                tick + 1,
                s.completed_episodes,
                s.successes,
                s.failures
            );
        }
    }

    RunEnd::TickLimit(*crossing.agent().stats())
}
