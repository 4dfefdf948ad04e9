#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Crossroad Physics
//!
//! The kinematic layer the crossing agents run against.
//!
//! Nothing in here is force-driven: bodies are moved by their owners at a
//! constant rate and the world only answers the question the agents care
//! about, namely which body started or stopped overlapping which trigger
//! volume this tick.
//!
//! ## Key Components
//!
//! -   **Math:** [`Vec3`] and [`BoundingBox`] in the [`types`] module.
//! -   **Motion:** [`move_towards`] performs the constant-rate interpolation
//!     used for every discrete step.
//! -   **World:** [`PhysicsWorld`] owns bodies and triggers and reports
//!     [`TriggerEvent`]s.
//! -   **Transforms:** [`transform`] exports 4x4 matrices for a renderer.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{BoundingBox, PhysicsWorld, TriggerPhase, Vec3};
//!
//! let mut world = PhysicsWorld::new();
//! let agent = world.add_body(Vec3::ZERO, Vec3::new(0.25, 0.25, 0.25));
//! world.add_trigger(BoundingBox::from_center(Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 1.0, 0.5)));
//!
//! world.move_body(agent, Vec3::new(0.0, 0.0, 1.0), Vec3::ZERO).unwrap();
//! let events = world.detect_triggers();
//! assert_eq!(events[0].phase, TriggerPhase::Enter);
//! ```

pub mod error;
pub mod kinematics;
pub mod transform;
pub mod types;
pub mod world;

pub use error::PhysicsError;
pub use kinematics::move_towards;
pub use types::{BoundingBox, Vec3};
pub use world::{BodyId, KinematicBody, PhysicsWorld, TriggerEvent, TriggerId, TriggerPhase, TriggerVolume};
