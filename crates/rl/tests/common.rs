use physics::{BodyId, BoundingBox, PhysicsWorld, TriggerId, Vec3};

pub const SPAWN: Vec3 = Vec3::new(0.0, 0.5, 0.0);
pub const DT: f32 = 0.005;

pub struct Layout {
    pub world: PhysicsWorld,
    pub agent: BodyId,
    pub goal: TriggerId,
}

/// Agent at the origin, goal band spanning z 3.5..4.5.
pub fn road() -> Layout {
    let mut world = PhysicsWorld::new();
    let agent = world.add_body(SPAWN, Vec3::new(0.25, 0.25, 0.25));
    let goal = world.add_trigger(BoundingBox::from_center(
        Vec3::new(0.0, 0.5, 4.0),
        Vec3::new(3.0, 1.0, 0.5),
    ));
    Layout { world, agent, goal }
}
