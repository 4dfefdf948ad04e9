//! # Crossroad
//!
//! A training scenario in which an agent learns to cross a road one discrete
//! step at a time.
//!
//! ## Project Architecture
//!
//! -   **`crossroad`:** this crate. The executable and the headless simulation
//!     loop in [`app`].
//! -   **[`physics`]:** kinematic bodies, trigger volumes and overlap edges.
//! -   **[`rl`]:** the agent state machine, episode bookkeeping, goal and
//!     hazard detectors, policies and the Gym-style environment view.
//! -   **[`scene`]:** JSON scene descriptions.
//!
//! ## Running
//!
//! ```text
//! crossroad --variant road --policy keys --keys up
//! crossroad --variant footpath --policy random --seed 3 --max-ticks 20000
//! crossroad --scene crates/scene/tests/data/road.json --episodes 10
//! ```

pub mod app;

pub use physics;
pub use rl;
pub use scene;
