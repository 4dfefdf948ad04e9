//! # Crossing Runtime
//!
//! Glue between an [`AgentController`] and the kinematic
//! [`PhysicsWorld`]: every tick the agent's interpolated position is written
//! to its body, trigger edges are collected, and enter events on the goal or
//! hazard volumes are routed to the matching detector.

use physics::{BodyId, PhysicsWorld, TriggerId, TriggerPhase, Vec3};

use crate::agent::{ActionOutcome, AgentController, EpisodeStart, Observation, Tick};
use crate::config::AgentConfig;
use crate::episode::Termination;
use crate::error::AgentError;
use crate::goal::{GoalDetector, HazardDetector, Rewardable};
use crate::sink::StatsSink;

/// Result of one [`Crossing::tick`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CrossingTick {
    pub agent: Tick,
    /// Episode terminations caused by trigger overlaps this tick.
    pub terminations: Vec<Termination>,
}

pub struct Crossing<S> {
    world: PhysicsWorld,
    agent: AgentController<S>,
    body: BodyId,
    goal: TriggerId,
    hazards: Vec<TriggerId>,
}

impl<S: StatsSink> Crossing<S> {
    /// Bind an agent to `body`, rewarded by reaching `goal`.
    ///
    /// The agent spawns wherever `body` currently is and observes the goal
    /// volume's center.
    ///
    /// # Errors
    ///
    /// [`AgentError::MissingBody`] or [`AgentError::MissingGoal`] when the
    /// handles are not part of `world`, or any configuration error.
    pub fn new(
        world: PhysicsWorld,
        body: BodyId,
        goal: Option<TriggerId>,
        hazards: Vec<TriggerId>,
        config: AgentConfig,
        sink: S,
    ) -> Result<Self, AgentError> {
        let spawn = world.body(body).map_err(AgentError::MissingBody)?.pos;
        let goal = goal.ok_or(AgentError::MissingGoal)?;
        let goal_position = world.trigger(goal).map_err(|_| AgentError::MissingGoal)?.position();
        let agent = AgentController::new(config, spawn, Some(goal_position), sink)?;
        tracing::info!(?spawn, ?goal_position, hazards = hazards.len(), "crossing ready");
        Ok(Self { world, agent, body, goal, hazards })
    }

    pub fn begin_episode(&mut self) -> EpisodeStart {
        let start = self.agent.begin_episode();
        if start == EpisodeStart::Started {
            self.sync_reset();
        }
        start
    }

    pub fn decide(&mut self, action: u32) -> ActionOutcome {
        let outcome = self.agent.on_action(action);
        if outcome == ActionOutcome::Interrupted {
            self.sync_reset();
        }
        outcome
    }

    /// Advance one fixed simulation step.
    pub fn tick(&mut self, dt: f32) -> CrossingTick {
        let agent_tick = self.agent.tick(dt);
        let state = *self.agent.state();
        if let Err(e) = self.world.move_body(self.body, state.current_position, state.velocity) {
            tracing::error!("agent body vanished: {e}");
        }

        let mut terminations = Vec::new();
        for event in self.world.detect_triggers() {
            if event.phase != TriggerPhase::Enter {
                continue;
            }
            let other: Option<&mut dyn Rewardable> = if event.body == self.body {
                Some(&mut self.agent)
            } else {
                None
            };
            let result = if event.trigger == self.goal {
                GoalDetector.on_trigger_enter(other)
            } else if self.hazards.contains(&event.trigger) {
                HazardDetector.on_trigger_enter(other)
            } else {
                None
            };
            // Remaining edges were produced by the ended episode's position.
            if let Some(termination) = result {
                terminations.push(termination);
                self.sync_reset();
                break;
            }
        }

        CrossingTick { agent: agent_tick, terminations }
    }

    /// Write the agent's position to its body with velocity and rotation cleared.
    fn sync_reset(&mut self) {
        if let Err(e) = self.world.reset_body(self.body, self.agent.position()) {
            tracing::error!("agent body vanished: {e}");
        }
    }

    #[must_use]
    pub fn observe(&self) -> Observation {
        self.agent.observe()
    }

    /// True when the episode ended and the driver has to begin the next one.
    #[must_use]
    pub fn awaiting_begin(&self) -> bool {
        !self.agent.episode().is_running()
    }

    #[must_use]
    pub fn agent(&self) -> &AgentController<S> {
        &self.agent
    }

    pub fn agent_mut(&mut self) -> &mut AgentController<S> {
        &mut self.agent
    }

    #[must_use]
    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    /// Current transform of the agent body for a renderer.
    #[must_use]
    pub fn agent_transform(&self) -> Option<[[f32; 4]; 4]> {
        self.world.body_transform(self.body).ok()
    }

    #[must_use]
    pub fn agent_body_position(&self) -> Option<Vec3> {
        self.world.body(self.body).ok().map(|b| b.pos)
    }
}
