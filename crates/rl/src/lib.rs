#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Crossing Agents
//!
//! Training-scenario logic for an agent that learns to cross a road by taking
//! discrete steps.
//!
//! ## Key Components
//!
//! -   **[`agent`]:** the [`AgentController`] state machine. Decodes discrete
//!     actions into one-axis steps, interpolates them, validates crosswalk
//!     bounds and runs the episode reward and reset protocol.
//! -   **[`goal`]:** passive [`GoalDetector`] and [`HazardDetector`] trigger
//!     handlers.
//! -   **[`crossing`]:** binds an agent to a [`physics::PhysicsWorld`] body
//!     and routes trigger overlaps.
//! -   **[`env`]:** a Gym-style [`Env`] view for learning code.
//! -   **[`policy`]:** random and scripted-key (heuristic) action sources.
//!
//! Two scenario presets share one state machine and differ only in
//! configuration: [`AgentConfig::cross_the_road`] waits for the driver to
//! begin each episode and stops after a fixed number of them, while
//! [`AgentConfig::footpath_walk`] confines the agent to a crosswalk and
//! restarts itself after every outcome.

pub mod action;
pub mod agent;
pub mod config;
pub mod crossing;
pub mod env;
pub mod episode;
pub mod error;
pub mod feedback;
pub mod goal;
pub mod policy;
pub mod sink;

pub use action::{heuristic, Direction, Key, ACTION_COUNT};
pub use agent::{ActionOutcome, AgentController, AgentState, EpisodeStart, Observation, Tick, OBSERVATION_SIZE};
pub use config::{AgentConfig, Crosswalk, ResetPolicy};
pub use crossing::{Crossing, CrossingTick};
pub use env::{CrossingEnv, Env, Step};
pub use episode::{Episode, EpisodePhase, EpisodeStats, Termination};
pub use error::{AgentError, ConfigError, KeyScriptError};
pub use feedback::{Flash, FlashFeedback};
pub use goal::{GoalDetector, HazardDetector, Rewardable};
pub use policy::{KeyScript, Policy, RandomPolicy};
pub use sink::{LogSink, OutcomeReport, Scoreboard, StatsSink};
