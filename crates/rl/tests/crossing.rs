mod common;

use common::{road, DT, SPAWN};
use physics::{BoundingBox, Vec3};
use rl::{
    ActionOutcome, AgentConfig, Crossing, Crosswalk, EpisodeStart, LogSink, Scoreboard, Termination,
};

fn play<S: rl::StatsSink>(crossing: &mut Crossing<S>, action: u32) -> Vec<Termination> {
    let mut seen = Vec::new();
    crossing.decide(action);
    for _ in 0..1000 {
        let tick = crossing.tick(DT);
        seen.extend(tick.terminations);
        if !crossing.agent().is_moving() {
            break;
        }
    }
    seen
}

#[test]
fn reaching_goal_ends_episode_once() {
    let l = road();
    let mut crossing =
        Crossing::new(l.world, l.agent, Some(l.goal), Vec::new(), AgentConfig::cross_the_road(), LogSink).unwrap();
    assert_eq!(crossing.begin_episode(), EpisodeStart::Started);

    for _ in 0..3 {
        assert!(play(&mut crossing, 3).is_empty());
    }
    assert_eq!(play(&mut crossing, 3), vec![Termination::Success]);
    assert!(crossing.awaiting_begin());

    // Sitting inside the goal does not fire again.
    for _ in 0..10 {
        assert!(crossing.tick(DT).terminations.is_empty());
    }
    assert_eq!(crossing.decide(3), ActionOutcome::EpisodeNotRunning);

    let stats = crossing.agent().stats();
    assert_eq!(stats.successes, 1);
    assert_eq!(stats.cumulative_steps, 4);
    assert!((stats.cumulative_reward - 1.0).abs() < 1e-6);

    assert_eq!(crossing.begin_episode(), EpisodeStart::Started);
    assert_eq!(crossing.agent().position(), SPAWN);
    assert_eq!(crossing.agent_body_position(), Some(SPAWN));
    let m = crossing.agent_transform().unwrap();
    assert_eq!(physics::transform::translation_of(&m), SPAWN);
}

#[test]
fn other_bodies_in_goal_are_ignored() {
    let mut l = road();
    l.world.add_body(Vec3::new(0.0, 0.5, 4.0), Vec3::new(0.25, 0.25, 0.25));
    let mut crossing =
        Crossing::new(l.world, l.agent, Some(l.goal), Vec::new(), AgentConfig::default(), LogSink).unwrap();
    crossing.begin_episode();
    assert!(crossing.tick(DT).terminations.is_empty());
    assert!(!crossing.awaiting_begin());
}

#[test]
fn body_follows_the_moving_agent() {
    let l = road();
    let body = l.agent;
    let mut crossing =
        Crossing::new(l.world, body, Some(l.goal), Vec::new(), AgentConfig::default(), LogSink).unwrap();
    crossing.begin_episode();
    crossing.decide(3);
    crossing.tick(DT);

    let b = crossing.world().body(body).unwrap();
    assert_eq!(b.pos, crossing.agent().position());
    assert!((b.vel.z - 50.0).abs() < 1e-3);

    while crossing.agent().is_moving() {
        crossing.tick(DT);
    }
    assert_eq!(crossing.world().body(body).unwrap().vel, Vec3::ZERO);
}

#[test]
fn hazard_fails_and_footpath_agent_resets_itself() {
    let mut l = road();
    let lane = l.world.add_trigger(BoundingBox::from_center(
        Vec3::new(2.0, 0.5, 0.0),
        Vec3::new(0.5, 1.0, 3.0),
    ));
    let crosswalk = Crosswalk::new(Vec3::new(-3.0, 0.0, -1.0), Vec3::new(3.0, 0.0, 5.0));
    let mut crossing = Crossing::new(
        l.world,
        l.agent,
        Some(l.goal),
        vec![lane],
        AgentConfig::footpath_walk(crosswalk),
        Scoreboard::default(),
    )
    .unwrap();
    crossing.begin_episode();

    assert!(play(&mut crossing, 2).is_empty());
    assert_eq!(play(&mut crossing, 2), vec![Termination::Failure]);

    assert!(!crossing.awaiting_begin());
    assert_eq!(crossing.agent().position(), SPAWN);
    assert_eq!(crossing.agent_body_position(), Some(SPAWN));

    let board = crossing.agent().sink();
    assert_eq!(board.reward, "-0.03");
    assert_eq!(board.episodes, "1");
    assert_eq!(board.steps, "2");
}

#[test]
fn goal_and_hazard_entered_together_end_one_episode() {
    let mut l = road();
    let overlapping = l.world.add_trigger(BoundingBox::from_center(
        Vec3::new(0.0, 0.5, 4.0),
        Vec3::new(3.0, 1.0, 0.5),
    ));
    let crosswalk = Crosswalk::new(Vec3::new(-3.0, 0.0, -1.0), Vec3::new(3.0, 0.0, 5.0));
    let mut crossing = Crossing::new(
        l.world,
        l.agent,
        Some(l.goal),
        vec![overlapping],
        AgentConfig::footpath_walk(crosswalk),
        Scoreboard::default(),
    )
    .unwrap();
    crossing.begin_episode();

    for _ in 0..3 {
        assert!(play(&mut crossing, 3).is_empty());
    }
    assert_eq!(play(&mut crossing, 3), vec![Termination::Success]);

    let agent = crossing.agent();
    assert_eq!(agent.stats().successes, 1);
    assert_eq!(agent.stats().failures, 0);
    assert_eq!(agent.episode().completed(), 1);
    assert_eq!(agent.episode().steps(), 0);
    assert_eq!(agent.position(), SPAWN);

    // Leaving both volumes on the next tick reports nothing.
    assert!(crossing.tick(DT).terminations.is_empty());
    assert_eq!(crossing.agent().stats().failures, 0);
}

#[test]
fn crosswalk_edge_rejects_and_penalises() {
    let l = road();
    let crosswalk = Crosswalk::new(Vec3::new(-2.0, 0.0, -2.0), Vec3::new(2.0, 0.0, 2.0));
    let mut crossing = Crossing::new(
        l.world,
        l.agent,
        Some(l.goal),
        Vec::new(),
        AgentConfig::footpath_walk(crosswalk),
        Scoreboard::default(),
    )
    .unwrap();
    crossing.begin_episode();
    play(&mut crossing, 2);
    play(&mut crossing, 2);
    assert_eq!(crossing.agent().position(), Vec3::new(2.0, 0.5, 0.0));

    let out = crossing.decide(2);
    assert_eq!(out, ActionOutcome::Rejected { target: Vec3::new(3.0, 0.5, 0.0) });
    crossing.tick(DT);
    assert_eq!(crossing.agent().position(), Vec3::new(2.0, 0.5, 0.0));
    assert!((crossing.agent_mut().take_reward() + 0.1).abs() < 1e-6);
}

#[test]
fn missing_goal_or_body_is_fatal() {
    let l = road();
    let err = Crossing::new(l.world, l.agent, None, Vec::new(), AgentConfig::default(), LogSink);
    assert!(matches!(err, Err(rl::AgentError::MissingGoal)));

    let l = road();
    let err = Crossing::new(l.world, physics::BodyId(9), Some(l.goal), Vec::new(), AgentConfig::default(), LogSink);
    assert!(matches!(err, Err(rl::AgentError::MissingBody(_))));
}
