//! # Kinematic World
//!
//! A deliberately small stand-in for an engine's physics stepper. Bodies are
//! axis-aligned boxes whose positions are written by their owners every tick;
//! triggers are static volumes. [`PhysicsWorld::detect_triggers`] compares the
//! current overlaps with those of the previous call and reports edges, so an
//! `Enter` is produced exactly once per continuous overlap.

use std::collections::HashSet;

use crate::error::PhysicsError;
use crate::transform::{to_transform_matrix, IDENTITY_ORIENTATION};
use crate::types::{BoundingBox, Vec3};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerId(pub usize);

/// Box-shaped body moved by gameplay code.
#[derive(Copy, Clone, Debug)]
pub struct KinematicBody {
    pub pos: Vec3,
    pub vel: Vec3,
    pub half_extents: Vec3,
    /// `[x, y, z, w]` quaternion
    pub orientation: [f32; 4],
}

impl KinematicBody {
    #[must_use]
    pub fn new(pos: Vec3, half_extents: Vec3) -> Self {
        Self {
            pos,
            vel: Vec3::ZERO,
            half_extents,
            orientation: IDENTITY_ORIENTATION,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_center(self.pos, self.half_extents)
    }
}

/// Static trigger volume.
#[derive(Copy, Clone, Debug)]
pub struct TriggerVolume {
    pub bounds: BoundingBox,
}

impl TriggerVolume {
    /// Reference position of the volume, its center.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.bounds.center()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriggerPhase {
    Enter,
    Exit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TriggerEvent {
    pub body: BodyId,
    pub trigger: TriggerId,
    pub phase: TriggerPhase,
}

#[derive(Default)]
pub struct PhysicsWorld {
    bodies: Vec<KinematicBody>,
    triggers: Vec<TriggerVolume>,
    overlapping: HashSet<(BodyId, TriggerId)>,
}

impl PhysicsWorld {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_body(&mut self, pos: Vec3, half_extents: Vec3) -> BodyId {
        self.bodies.push(KinematicBody::new(pos, half_extents));
        BodyId(self.bodies.len() - 1)
    }

    pub fn add_trigger(&mut self, bounds: BoundingBox) -> TriggerId {
        self.triggers.push(TriggerVolume { bounds });
        TriggerId(self.triggers.len() - 1)
    }

    /// # Errors
    ///
    /// Returns [`PhysicsError::UnknownBody`] if `id` was not issued by this world.
    pub fn body(&self, id: BodyId) -> Result<&KinematicBody, PhysicsError> {
        self.bodies.get(id.0).ok_or(PhysicsError::UnknownBody(id.0))
    }

    /// # Errors
    ///
    /// Returns [`PhysicsError::UnknownBody`] if `id` was not issued by this world.
    pub fn body_mut(&mut self, id: BodyId) -> Result<&mut KinematicBody, PhysicsError> {
        self.bodies.get_mut(id.0).ok_or(PhysicsError::UnknownBody(id.0))
    }

    /// # Errors
    ///
    /// Returns [`PhysicsError::UnknownTrigger`] if `id` was not issued by this world.
    pub fn trigger(&self, id: TriggerId) -> Result<&TriggerVolume, PhysicsError> {
        self.triggers.get(id.0).ok_or(PhysicsError::UnknownTrigger(id.0))
    }

    /// Write an interpolated position and the velocity that produced it, the
    /// engine-side half of a kinematic move.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::UnknownBody`] for a foreign handle.
    pub fn move_body(&mut self, id: BodyId, pos: Vec3, vel: Vec3) -> Result<(), PhysicsError> {
        let body = self.body_mut(id)?;
        body.pos = pos;
        body.vel = vel;
        Ok(())
    }

    /// Put a body back at `pos` with zero velocity and identity orientation.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::UnknownBody`] for a foreign handle.
    pub fn reset_body(&mut self, id: BodyId, pos: Vec3) -> Result<(), PhysicsError> {
        let body = self.body_mut(id)?;
        body.pos = pos;
        body.vel = Vec3::ZERO;
        body.orientation = IDENTITY_ORIENTATION;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`PhysicsError::UnknownBody`] for a foreign handle.
    pub fn body_transform(&self, id: BodyId) -> Result<[[f32; 4]; 4], PhysicsError> {
        let body = self.body(id)?;
        Ok(to_transform_matrix(body.pos, body.orientation))
    }

    /// Report overlap edges since the previous call, sorted by body then trigger.
    pub fn detect_triggers(&mut self) -> Vec<TriggerEvent> {
        let mut current = HashSet::new();
        for (b, body) in self.bodies.iter().enumerate() {
            let bounds = body.bounds();
            for (t, trigger) in self.triggers.iter().enumerate() {
                if bounds.intersects(&trigger.bounds) {
                    current.insert((BodyId(b), TriggerId(t)));
                }
            }
        }

        let mut events: Vec<TriggerEvent> = current
            .difference(&self.overlapping)
            .map(|&(body, trigger)| TriggerEvent { body, trigger, phase: TriggerPhase::Enter })
            .chain(
                self.overlapping
                    .difference(&current)
                    .map(|&(body, trigger)| TriggerEvent { body, trigger, phase: TriggerPhase::Exit }),
            )
            .collect();
        events.sort_by_key(|e| (e.body, e.trigger, e.phase == TriggerPhase::Enter));

        for event in &events {
            tracing::trace!(?event, "trigger edge");
        }
        self.overlapping = current;
        events
    }
}
