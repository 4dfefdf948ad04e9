use crate::action::ACTION_COUNT;
use crate::agent::{ActionOutcome, EpisodeStart, OBSERVATION_SIZE};
use crate::crossing::Crossing;
use crate::sink::StatsSink;

/// Result of one environment step.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub obs: Vec<f32>,
    pub reward: f32,
    pub done: bool,
}

/// Reinforcement learning environment trait.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait defines the core
/// interface an environment must provide. Each call to [`step`] advances the
/// simulation by one discrete action and returns the new observation vector,
/// the reward collected since the previous step, and whether the episode has
/// terminated.
///
/// [`step`]: Env::step
pub trait Env {
    /// Advance the environment by one action.
    fn step(&mut self, action: u32) -> Step;

    /// Start a new episode and return the initial observation vector, or
    /// `None` if the environment will not run any more episodes.
    fn reset(&mut self) -> Option<Vec<f32>>;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Size of the action space.
    fn action_size(&self) -> usize;
}

/// Step-synchronous view of a [`Crossing`]: every action is played out until
/// the agent settles (or the episode ends) before `step` returns.
pub struct CrossingEnv<S> {
    crossing: Crossing<S>,
    dt: f32,
    max_ticks_per_step: u32,
}

impl<S: StatsSink> CrossingEnv<S> {
    #[must_use]
    pub fn new(crossing: Crossing<S>, dt: f32) -> Self {
        Self { crossing, dt, max_ticks_per_step: 10_000 }
    }

    #[must_use]
    pub fn crossing(&self) -> &Crossing<S> {
        &self.crossing
    }

    pub fn crossing_mut(&mut self) -> &mut Crossing<S> {
        &mut self.crossing
    }
}

impl<S: StatsSink> Env for CrossingEnv<S> {
    fn step(&mut self, action: u32) -> Step {
        let completed_before = self.crossing.agent().episode().completed();
        let outcome = self.crossing.decide(action);

        if !matches!(outcome, ActionOutcome::Interrupted | ActionOutcome::EpisodeNotRunning) {
            for _ in 0..self.max_ticks_per_step {
                let tick = self.crossing.tick(self.dt);
                if !tick.terminations.is_empty() || !self.crossing.agent().is_moving() {
                    break;
                }
            }
        }

        let done = self.crossing.agent().episode().completed() > completed_before
            || self.crossing.awaiting_begin();
        Step {
            obs: self.crossing.observe().to_vec(),
            reward: self.crossing.agent_mut().take_reward(),
            done,
        }
    }

    fn reset(&mut self) -> Option<Vec<f32>> {
        match self.crossing.begin_episode() {
            EpisodeStart::Started => {
                self.crossing.agent_mut().take_reward();
                Some(self.crossing.observe().to_vec())
            }
            EpisodeStart::CapReached(_) => None,
        }
    }

    fn obs_size(&self) -> usize {
        OBSERVATION_SIZE
    }

    fn action_size(&self) -> usize {
        ACTION_COUNT
    }
}
