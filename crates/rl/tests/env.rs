mod common;

use common::{road, DT};
use rl::{AgentConfig, Crossing, CrossingEnv, Env, LogSink};

#[test]
fn env_reports_terminal_reward_and_respects_cap() {
    let l = road();
    let config = AgentConfig { episode_cap: Some(2), ..AgentConfig::cross_the_road() };
    let crossing = Crossing::new(l.world, l.agent, Some(l.goal), Vec::new(), config, LogSink).unwrap();
    let mut env = CrossingEnv::new(crossing, DT);
    assert_eq!(env.obs_size(), 6);
    assert_eq!(env.action_size(), 4);

    for _ in 0..2 {
        let obs = env.reset().expect("episode should start");
        assert_eq!(obs, vec![0.0, 0.5, 0.0, 0.0, 0.5, 4.0]);
        for _ in 0..3 {
            let step = env.step(3);
            assert!(!step.done);
            assert_eq!(step.reward, 0.0);
        }
        let step = env.step(3);
        assert!(step.done);
        assert!((step.reward - 1.0).abs() < 1e-6);
    }

    assert!(env.reset().is_none());
    assert_eq!(env.crossing().agent().stats().successes, 2);
}

#[test]
fn idle_step_keeps_observation() {
    let l = road();
    let crossing = Crossing::new(l.world, l.agent, Some(l.goal), Vec::new(), AgentConfig::default(), LogSink).unwrap();
    let mut env = CrossingEnv::new(crossing, DT);
    let first = env.reset().unwrap();
    let step = env.step(0);
    assert_eq!(step.obs, first);
    assert!(!step.done);
}
