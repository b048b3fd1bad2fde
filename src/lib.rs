//! Verlet rope simulation for interactive scenes.
//!
//! `lanyard` simulates a chain of point masses joined by distance
//! constraints. A host (typically a browser renderer) builds a [`Rope`] from
//! initial positions, calls [`Rope::tick`] once per frame, and copies the
//! resulting positions into its own meshes.
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Distance constraints**: Iterative relaxation with stiffness and damping
//! - **Self-collision**: Non-adjacent particles are kept a minimum distance apart
//! - **Locking**: Pin and drag any particle, e.g. the rope's anchor
//! - **Observable**: Monitor each tick via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use lanyard::{Rope, RopeConfig, Vec3};
//!
//! let config = RopeConfig::new().with_gravity(Vec3::new(0.0, -0.02, 0.0));
//! let mut rope = Rope::hanging(Vec3::new(0.0f32, 10.0, 0.0), 1.0, 10, config).unwrap();
//! for _ in 0..60 {
//!     rope.tick();
//! }
//! assert_eq!(rope.positions().len(), 10);
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod collision;
pub mod solver;
pub mod rope;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2, Vec3};
pub use particle::Particle;
pub use constraint::DistanceConstraint;
pub use collision::SelfCollision;
pub use solver::ConstraintSolver;
pub use rope::Rope;
pub use config::RopeConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::RopeError;
