#![deny(clippy::all, clippy::pedantic)]
//! JSON scene descriptions.
//!
//! A scene names the agent's body, the goal region, optional hazard regions
//! and the agent configuration. [`SceneDef::into_crossing`] builds the physics
//! world and binds an agent to it; a scene without an agent body or goal is
//! rejected there.

use std::path::Path;

use anyhow::{Context, Result};
use physics::{BoundingBox, PhysicsWorld, Vec3};
use rl::{AgentConfig, Crossing, Crosswalk, StatsSink};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct SceneDef {
    #[serde(default)]
    pub name: String,
    pub agent: Option<AgentBody>,
    pub goal: Option<Region>,
    #[serde(default)]
    pub hazards: Vec<Region>,
    #[serde(default)]
    pub config: AgentConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AgentBody {
    pub pos: [f32; 3],
    #[serde(default = "agent_half_extents")]
    pub half_extents: [f32; 3],
}

/// Axis-aligned trigger region.
#[derive(Deserialize, Debug, Clone)]
pub struct Region {
    #[serde(default)]
    pub id: String,
    pub center: [f32; 3],
    pub half_extents: [f32; 3],
}

impl Region {
    fn bounds(&self) -> BoundingBox {
        BoundingBox::from_center(self.center.into(), self.half_extents.into())
    }
}

fn agent_half_extents() -> [f32; 3] {
    [0.25, 0.25, 0.25]
}

impl SceneDef {
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid scene.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading scene {}", path.display()))?;
        Self::from_str(&json).with_context(|| format!("parsing scene {}", path.display()))
    }

    /// Straight road: walk forward from the curb to the far side.
    #[must_use]
    pub fn road() -> Self {
        Self {
            name: "road".to_owned(),
            agent: Some(AgentBody { pos: [0.0, 0.5, 0.0], half_extents: agent_half_extents() }),
            goal: Some(Region {
                id: "far_curb".to_owned(),
                center: [0.0, 0.5, 6.0],
                half_extents: [4.0, 1.0, 0.5],
            }),
            hazards: Vec::new(),
            config: AgentConfig::cross_the_road(),
        }
    }

    /// Crosswalk with traffic on both sides; stepping into a lane is a failure.
    #[must_use]
    pub fn footpath() -> Self {
        let crosswalk = Crosswalk::new(Vec3::new(-3.0, 0.0, -1.0), Vec3::new(3.0, 0.0, 6.0));
        Self {
            name: "footpath".to_owned(),
            agent: Some(AgentBody { pos: [0.0, 0.5, 0.0], half_extents: agent_half_extents() }),
            goal: Some(Region {
                id: "far_curb".to_owned(),
                center: [0.0, 0.5, 6.0],
                half_extents: [3.0, 1.0, 0.5],
            }),
            hazards: vec![
                Region { id: "left_lane".to_owned(), center: [-3.0, 0.5, 2.5], half_extents: [0.5, 1.0, 3.5] },
                Region { id: "right_lane".to_owned(), center: [3.0, 0.5, 2.5], half_extents: [0.5, 1.0, 3.5] },
            ],
            config: AgentConfig::footpath_walk(crosswalk),
        }
    }

    /// Build the world and bind an agent using the scene's own config.
    ///
    /// # Errors
    ///
    /// Fails when the scene has no agent body or no goal region, or when the
    /// agent configuration is invalid.
    pub fn into_crossing<S: StatsSink>(self, sink: S) -> Result<Crossing<S>> {
        let config = self.config.clone();
        self.into_crossing_with(config, sink)
    }

    /// Like [`SceneDef::into_crossing`] with an overriding configuration.
    ///
    /// # Errors
    ///
    /// See [`SceneDef::into_crossing`].
    pub fn into_crossing_with<S: StatsSink>(self, config: AgentConfig, sink: S) -> Result<Crossing<S>> {
        let agent = self
            .agent
            .with_context(|| format!("scene {:?} has no agent body", self.name))?;

        let mut world = PhysicsWorld::new();
        let body = world.add_body(agent.pos.into(), agent.half_extents.into());
        let goal = self.goal.as_ref().map(|g| world.add_trigger(g.bounds()));
        let hazards = self.hazards.iter().map(|h| world.add_trigger(h.bounds())).collect();

        tracing::info!(scene = %self.name, hazards = self.hazards.len(), "scene loaded");
        Crossing::new(world, body, goal, hazards, config, sink)
            .with_context(|| format!("binding agent in scene {:?}", self.name))
    }
}
