//! # Agent Controller
//!
//! The per-agent state machine shared by the road-crossing and footpath
//! scenarios.
//!
//! The agent is either idle or moving toward a pending target. A discrete
//! action received while idle decodes into a one-axis step; the move is then
//! interpolated at a constant rate by [`AgentController::tick`] until it
//! settles. Actions that arrive while a move is in flight are dropped, so at
//! most one move is ever pending.
//!
//! Episodes end through [`AgentController::give_points`] (goal reached) or
//! [`AgentController::take_away_points`] (failure reported by some external
//! collaborator). Exactly one of them counts per episode. What happens next
//! depends on the configured [`ResetPolicy`].

use physics::{move_towards, Vec3};

use crate::action::Direction;
use crate::config::{AgentConfig, ResetPolicy, BOUNDARY_PENALTY, FAILURE_REWARD, SUCCESS_REWARD};
use crate::episode::{Episode, EpisodeStats, Termination};
use crate::error::AgentError;
use crate::feedback::{Flash, FlashFeedback};
use crate::sink::{LogSink, OutcomeReport, StatsSink};

/// Remaining distance at which a move snaps to its target.
pub const SETTLE_EPSILON: f32 = 1e-5;

pub const OBSERVATION_SIZE: usize = 6;

/// Agent position followed by goal position, unnormalised.
pub type Observation = [f32; OBSERVATION_SIZE];

/// Position state of one agent.
///
/// While `move_in_progress` is false, `current_position == pending_target`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentState {
    /// Captured at construction, never changes.
    pub original_position: Vec3,
    pub current_position: Vec3,
    pub pending_target: Vec3,
    pub move_in_progress: bool,
    pub last_direction: Direction,
    pub velocity: Vec3,
}

impl AgentState {
    fn at(position: Vec3) -> Self {
        Self {
            original_position: position,
            current_position: position,
            pending_target: position,
            move_in_progress: false,
            last_direction: Direction::Idle,
            velocity: Vec3::ZERO,
        }
    }

    fn restore(&mut self) {
        *self = Self::at(self.original_position);
    }
}

/// Result of handing one discrete action to the agent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ActionOutcome {
    /// Action 0; nothing to do.
    Stayed,
    Moving { target: Vec3 },
    /// Target was outside the crosswalk; penalty applied, no move.
    Rejected { target: Vec3 },
    IgnoredWhileMoving,
    /// Index outside the action space.
    Invalid(u32),
    EpisodeNotRunning,
    /// This action used up the step limit; the episode was interrupted.
    Interrupted,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EpisodeStart {
    Started,
    /// The episode cap was reached; the run must stop. Carries the final tallies.
    CapReached(EpisodeStats),
}

/// Per-tick report.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tick {
    /// A move reached its target during this tick.
    pub settled: bool,
    pub flash_ended: Option<Flash>,
}

pub struct AgentController<S = LogSink> {
    config: AgentConfig,
    goal_position: Vec3,
    state: AgentState,
    episode: Episode,
    stats: EpisodeStats,
    feedback: FlashFeedback,
    sink: S,
}

impl<S: StatsSink> AgentController<S> {
    /// Build an agent spawned at `spawn`.
    ///
    /// # Errors
    ///
    /// Fails fast on an invalid configuration or when no goal is available.
    pub fn new(config: AgentConfig, spawn: Vec3, goal: Option<Vec3>, sink: S) -> Result<Self, AgentError> {
        config.validate()?;
        let goal_position = goal.ok_or(AgentError::MissingGoal)?;
        Ok(Self {
            config,
            goal_position,
            state: AgentState::at(spawn),
            episode: Episode::new(),
            stats: EpisodeStats::default(),
            feedback: FlashFeedback::new(),
            sink,
        })
    }

    /// Episode-begin entry point.
    ///
    /// With an episode cap configured, refuses to start once that many
    /// episodes have completed. The final tallies are logged before this
    /// returns.
    pub fn begin_episode(&mut self) -> EpisodeStart {
        if let Some(cap) = self.config.episode_cap {
            if self.episode.completed() >= cap {
                tracing::info!("Maximum episodes reached. Stopping.");
                tracing::info!(
                    "Successes: {}, Failures: {}",
                    self.stats.successes,
                    self.stats.failures
                );
                self.sink.on_run_complete(&self.stats);
                return EpisodeStart::CapReached(self.stats);
            }
        }
        self.state.restore();
        self.episode.begin();
        tracing::debug!(episode = self.episode.completed(), "episode begin");
        EpisodeStart::Started
    }

    /// Decision entry point: one discrete action per call.
    pub fn on_action(&mut self, action: u32) -> ActionOutcome {
        if !self.episode.is_running() {
            return ActionOutcome::EpisodeNotRunning;
        }
        let outcome = self.apply_action(action);
        self.episode.increment_step();

        if let Some(max) = self.config.max_steps {
            if self.episode.steps() >= max {
                self.finish(Termination::Interrupted);
                return ActionOutcome::Interrupted;
            }
        }
        outcome
    }

    fn apply_action(&mut self, action: u32) -> ActionOutcome {
        if self.state.move_in_progress {
            return ActionOutcome::IgnoredWhileMoving;
        }
        let Some(direction) = Direction::from_index(action) else {
            tracing::warn!(action, "action index out of range");
            return ActionOutcome::Invalid(action);
        };

        let current = self.state.current_position;
        let target = current + direction.displacement(self.config.step_amount);
        self.state.last_direction = direction;
        self.state.pending_target = target;
        self.state.move_in_progress = direction.is_move();

        if let Some(crosswalk) = &self.config.crosswalk {
            if !crosswalk.contains(target) {
                self.state.pending_target = current;
                self.state.move_in_progress = false;
                self.episode.add_reward(BOUNDARY_PENALTY);
                tracing::debug!(?target, "move leaves the crosswalk");
                return ActionOutcome::Rejected { target };
            }
        }

        if direction.is_move() {
            ActionOutcome::Moving { target }
        } else {
            ActionOutcome::Stayed
        }
    }

    /// Advance motion and the feedback timer by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> Tick {
        let flash_ended = self.feedback.advance(dt);
        let mut settled = false;

        if self.state.move_in_progress {
            let before = self.state.current_position;
            let target = self.state.pending_target;
            let next = move_towards(before, target, dt * self.config.speed);
            self.state.velocity = if dt > 0.0 { (next - before) * (1.0 / dt) } else { Vec3::ZERO };
            self.state.current_position = next;

            if next.distance(target) <= SETTLE_EPSILON {
                self.state.current_position = target;
                self.state.move_in_progress = false;
                self.state.velocity = Vec3::ZERO;
                settled = true;
            }
        }

        Tick { settled, flash_ended }
    }

    /// Success entry point. `None` when no episode is running.
    pub fn give_points(&mut self) -> Option<Termination> {
        self.terminate(Termination::Success, SUCCESS_REWARD)
    }

    /// Failure entry point. `None` when no episode is running.
    pub fn take_away_points(&mut self) -> Option<Termination> {
        self.terminate(Termination::Failure, FAILURE_REWARD)
    }

    fn terminate(&mut self, termination: Termination, reward: f32) -> Option<Termination> {
        if !self.episode.is_running() {
            tracing::debug!(?termination, "outcome ignored, no episode running");
            return None;
        }
        self.episode.add_reward(reward);
        self.finish(termination);
        Some(termination)
    }

    fn finish(&mut self, termination: Termination) {
        self.stats.record(termination, self.episode.reward(), self.episode.steps());
        let report = OutcomeReport {
            termination,
            episode: self.episode.completed(),
            episode_reward: self.episode.reward(),
            episode_steps: self.episode.steps(),
            stats: self.stats,
        };
        self.episode.end();

        let effect = match termination {
            Termination::Success => Some(&self.config.success_effect),
            Termination::Failure => Some(&self.config.failure_effect),
            Termination::Interrupted => None,
        };
        if let Some(effect) = effect {
            self.feedback.trigger(termination, effect, self.config.feedback_duration);
        }
        self.sink.on_outcome(&report);

        if self.config.reset_policy == ResetPolicy::SelfReset {
            self.state.restore();
            self.episode.begin();
        }
    }

    /// Agent position then goal position.
    #[must_use]
    pub fn observe(&self) -> Observation {
        bytemuck::cast([self.state.current_position, self.goal_position])
    }

    /// Reward accumulated since the previous call, for the learning side.
    pub fn take_reward(&mut self) -> f32 {
        self.episode.take_unreported()
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.state.current_position
    }

    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.state.move_in_progress
    }

    #[must_use]
    pub fn state(&self) -> &AgentState {
        &self.state
    }

    #[must_use]
    pub fn episode(&self) -> &Episode {
        &self.episode
    }

    #[must_use]
    pub fn stats(&self) -> &EpisodeStats {
        &self.stats
    }

    #[must_use]
    pub fn feedback(&self) -> &FlashFeedback {
        &self.feedback
    }

    #[must_use]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    #[must_use]
    pub fn goal_position(&self) -> Vec3 {
        self.goal_position
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }
}
