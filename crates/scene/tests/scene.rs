use rl::{EpisodeStart, LogSink, ResetPolicy, Scoreboard, Termination};
use scene::SceneDef;

fn settle<S: rl::StatsSink>(crossing: &mut rl::Crossing<S>, action: u32) -> Vec<Termination> {
    crossing.decide(action);
    let mut seen = Vec::new();
    for _ in 0..1000 {
        seen.extend(crossing.tick(0.01).terminations);
        if !crossing.agent().is_moving() {
            break;
        }
    }
    seen
}

#[test]
fn parse_road_scene() {
    let scene = SceneDef::from_path("tests/data/road.json").unwrap();
    assert_eq!(scene.name, "road");
    assert!(scene.hazards.is_empty());
    assert_eq!(scene.config.speed, 40.0);
    assert_eq!(scene.config.step_amount, 1.0);
    assert_eq!(scene.config.episode_cap, Some(100));
    assert_eq!(scene.agent.unwrap().half_extents, [0.25, 0.25, 0.25]);
}

#[test]
fn parse_footpath_scene() {
    let scene = SceneDef::from_path("tests/data/footpath.json").unwrap();
    assert_eq!(scene.hazards.len(), 2);
    assert_eq!(scene.config.reset_policy, ResetPolicy::SelfReset);
    assert_eq!(scene.config.success_effect, "green_ground");
    assert!(scene.config.crosswalk.is_some());
}

#[test]
fn road_scene_runs_to_goal() {
    let scene = SceneDef::from_path("tests/data/road.json").unwrap();
    let mut crossing = scene.into_crossing(LogSink).unwrap();
    assert_eq!(crossing.begin_episode(), EpisodeStart::Started);
    // Goal band starts at z = 2.5; the third step reaches it.
    assert!(settle(&mut crossing, 3).is_empty());
    assert!(settle(&mut crossing, 3).is_empty());
    assert_eq!(settle(&mut crossing, 3), vec![Termination::Success]);
    assert_eq!(crossing.agent().stats().successes, 1);
}

#[test]
fn footpath_scene_flashes_configured_effect() {
    let scene = SceneDef::from_path("tests/data/footpath.json").unwrap();
    let mut crossing = scene.into_crossing(Scoreboard::default()).unwrap();
    crossing.begin_episode();
    let mut outcome = Vec::new();
    for _ in 0..6 {
        outcome.extend(settle(&mut crossing, 3));
    }
    assert_eq!(outcome, vec![Termination::Success]);
    assert_eq!(crossing.agent().feedback().active().unwrap().effect, "green_ground");
    assert_eq!(crossing.agent().sink().episodes, "1");
}

#[test]
fn scene_without_goal_is_rejected() {
    let scene = SceneDef::from_path("tests/data/no_goal.json").unwrap();
    let err = scene.into_crossing(LogSink).err().unwrap();
    assert!(err.chain().any(|e| e.to_string().contains("no goal region")));
}

#[test]
fn scene_without_agent_is_rejected() {
    let scene = SceneDef::from_str(r#"{ "name": "empty" }"#).unwrap();
    assert!(scene.into_crossing(LogSink).is_err());
}

#[test]
fn builtin_scenes_build() {
    assert!(SceneDef::road().into_crossing(LogSink).is_ok());
    assert!(SceneDef::footpath().into_crossing(Scoreboard::default()).is_ok());
}

#[test]
fn stepping_into_a_lane_fails_the_episode() {
    let mut crossing = SceneDef::footpath().into_crossing(Scoreboard::default()).unwrap();
    crossing.begin_episode();
    assert!(settle(&mut crossing, 1).is_empty());
    assert!(settle(&mut crossing, 1).is_empty());
    assert_eq!(settle(&mut crossing, 1), vec![Termination::Failure]);
    assert_eq!(crossing.agent().sink().episodes, "1");
}
