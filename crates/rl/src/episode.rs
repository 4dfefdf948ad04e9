//! Episode bookkeeping.
//!
//! [`Episode`] is the per-episode ledger a learning framework keeps for every
//! agent (reward since reset, decision steps, how many episodes have ended).
//! [`EpisodeStats`] is the run-long tally folded in at every episode end.

/// Lifecycle of the current episode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EpisodePhase {
    /// Constructed, no episode begun yet.
    #[default]
    NotStarted,
    Running,
    /// Ended; waiting for the driver to begin the next one.
    Ended,
}

/// How an episode ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Termination {
    Success,
    Failure,
    /// Step limit hit, no terminal reward.
    Interrupted,
}

#[derive(Clone, Debug, Default)]
pub struct Episode {
    phase: EpisodePhase,
    reward: f32,
    steps: u32,
    completed: u32,
    unreported: f32,
}

impl Episode {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh episode: reward and step count go back to zero.
    pub fn begin(&mut self) {
        self.phase = EpisodePhase::Running;
        self.reward = 0.0;
        self.steps = 0;
    }

    /// Close the running episode and count it as completed.
    pub fn end(&mut self) {
        self.phase = EpisodePhase::Ended;
        self.completed += 1;
    }

    pub fn add_reward(&mut self, delta: f32) {
        self.reward += delta;
        self.unreported += delta;
    }

    pub fn increment_step(&mut self) {
        self.steps += 1;
    }

    /// Reward accumulated since the last call, across episode boundaries.
    pub fn take_unreported(&mut self) -> f32 {
        std::mem::take(&mut self.unreported)
    }

    #[must_use]
    pub fn phase(&self) -> EpisodePhase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == EpisodePhase::Running
    }

    /// Cumulative reward since the episode began.
    #[must_use]
    pub fn reward(&self) -> f32 {
        self.reward
    }

    /// Decision steps taken in this episode.
    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    #[must_use]
    pub fn completed(&self) -> u32 {
        self.completed
    }
}

/// Run-long statistics. Only touched when an episode ends.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EpisodeStats {
    pub cumulative_reward: f32,
    pub cumulative_steps: u64,
    pub successes: u32,
    pub failures: u32,
    pub interruptions: u32,
    pub completed_episodes: u32,
}

impl EpisodeStats {
    /// Fold a finished episode into the totals.
    pub fn record(&mut self, termination: Termination, reward: f32, steps: u32) {
        self.cumulative_reward += reward;
        self.cumulative_steps += u64::from(steps);
        match termination {
            Termination::Success => self.successes += 1,
            Termination::Failure => self.failures += 1,
            Termination::Interrupted => self.interruptions += 1,
        }
        self.completed_episodes += 1;
    }
}
