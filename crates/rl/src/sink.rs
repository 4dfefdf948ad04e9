//! Where episode outcomes are reported.
//!
//! The road-crossing agent writes log lines ([`LogSink`]); the footpath agent
//! pushes display strings to a scoreboard ([`Scoreboard`]).

use crate::episode::{EpisodeStats, Termination};

/// Everything a sink learns about one finished episode.
#[derive(Copy, Clone, Debug)]
pub struct OutcomeReport {
    pub termination: Termination,
    /// Zero-based index of the episode that just ended.
    pub episode: u32,
    pub episode_reward: f32,
    pub episode_steps: u32,
    /// Totals after this episode was folded in.
    pub stats: EpisodeStats,
}

pub trait StatsSink {
    fn on_outcome(&mut self, report: &OutcomeReport);

    /// Called once when the run stops at its episode cap.
    fn on_run_complete(&mut self, _stats: &EpisodeStats) {}
}

impl<S: StatsSink + ?Sized> StatsSink for Box<S> {
    fn on_outcome(&mut self, report: &OutcomeReport) {
        (**self).on_outcome(report);
    }

    fn on_run_complete(&mut self, stats: &EpisodeStats) {
        (**self).on_run_complete(stats);
    }
}

/// Structured log lines through `tracing`.
#[derive(Debug, Default)]
pub struct LogSink;

impl StatsSink for LogSink {
    fn on_outcome(&mut self, report: &OutcomeReport) {
        let s = &report.stats;
        tracing::info!(
            "Cumulative Reward: {:.2}, Total Steps: {}",
            s.cumulative_reward,
            s.cumulative_steps
        );
        match report.termination {
            Termination::Success => tracing::info!(
                episode = report.episode,
                successes = s.successes,
                "Episode {}: Success! Total Successes: {}",
                report.episode,
                s.successes
            ),
            Termination::Failure => tracing::info!(
                episode = report.episode,
                failures = s.failures,
                "Episode {}: Failure. Total Failures: {}",
                report.episode,
                s.failures
            ),
            Termination::Interrupted => tracing::info!(
                episode = report.episode,
                steps = report.episode_steps,
                "Episode {}: interrupted at step limit",
                report.episode
            ),
        }
    }
}

/// Display strings for an on-screen scoreboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub reward: String,
    pub episodes: String,
    pub steps: String,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            reward: "0.00".to_owned(),
            episodes: "0".to_owned(),
            steps: "0".to_owned(),
        }
    }
}

impl StatsSink for Scoreboard {
    fn on_outcome(&mut self, report: &OutcomeReport) {
        let s = &report.stats;
        self.reward = format!("{:.2}", s.cumulative_reward);
        self.episodes = s.completed_episodes.to_string();
        self.steps = s.cumulative_steps.to_string();
    }
}
