//! Configuration for the rope simulation.

use crate::float::Float;
use crate::vec::Vec;
use crate::collision::SelfCollision;
use crate::error::RopeError;

/// Simulation parameters read by every [`Rope::tick`](crate::Rope::tick).
///
/// Fields are public so a host can adjust them between ticks. Nothing is
/// validated on the hot path; hosts that accept user input can call
/// [`validate`](RopeConfig::validate).
///
/// # Builder Pattern
/// ```
/// use lanyard::config::RopeConfig;
/// use lanyard::vec::Vec3;
///
/// let config: RopeConfig<Vec3<f32>> = RopeConfig::new()
///     .with_gravity(Vec3::new(0.0, -0.02, 0.0))
///     .with_damping(0.99)
///     .with_stiffness(0.5)
///     .with_constraint_iterations(5)
///     .with_collision_iterations(3)
///     .with_self_collision(0.05, 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound(
    serialize = "V: serde::Serialize, V::Scalar: serde::Serialize",
    deserialize = "V: serde::Deserialize<'de>, V::Scalar: serde::Deserialize<'de>"
)))]
pub struct RopeConfig<V: Vec> {
    /// Displacement added to every free particle each tick. Default: zero.
    pub gravity: V,
    /// Fraction of implicit velocity kept after each damping step, in (0, 1].
    /// 1.0 = no damping. Default: 0.99.
    pub damping: V::Scalar,
    /// Fraction of the full distance correction applied per pass, in (0, 1].
    /// Default: 0.5.
    pub stiffness: V::Scalar,
    /// Constraint passes per tick, at least 1. Default: 5.
    pub constraint_iterations: usize,
    /// Self-collision passes per tick, run before the constraint passes.
    /// Default: 3.
    pub collision_iterations: usize,
    /// Self-collision separation and index gap. Default: 0.05 and 2.
    pub self_collision: SelfCollision<V::Scalar>,
}

impl<V: Vec> RopeConfig<V> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        RopeConfig {
            gravity: V::zero(),
            damping: V::Scalar::from_f32(0.99),
            stiffness: V::Scalar::half(),
            constraint_iterations: 5,
            collision_iterations: 3,
            self_collision: SelfCollision::default(),
        }
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: V) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: V::Scalar) -> Self {
        self.damping = damping;
        self
    }

    /// Set the constraint stiffness.
    pub fn with_stiffness(mut self, stiffness: V::Scalar) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set the number of constraint passes per tick.
    pub fn with_constraint_iterations(mut self, iterations: usize) -> Self {
        self.constraint_iterations = iterations.max(1);
        self
    }

    /// Set the number of self-collision passes per tick. Zero skips the pass.
    pub fn with_collision_iterations(mut self, iterations: usize) -> Self {
        self.collision_iterations = iterations;
        self
    }

    /// Set the self-collision separation and minimum index gap.
    pub fn with_self_collision(mut self, min_distance: V::Scalar, min_index_gap: usize) -> Self {
        self.self_collision = SelfCollision::new(min_distance, min_index_gap);
        self
    }

    /// Check the documented ranges.
    pub fn validate(&self) -> Result<(), RopeError> {
        let zero = V::Scalar::zero();
        let one = V::Scalar::one();
        if !self.damping.is_finite() || self.damping <= zero || self.damping > one {
            return Err(RopeError::InvalidDamping);
        }
        if !self.stiffness.is_finite() || self.stiffness <= zero || self.stiffness > one {
            return Err(RopeError::InvalidStiffness);
        }
        let min_distance = self.self_collision.min_distance;
        if !min_distance.is_finite() || min_distance < zero {
            return Err(RopeError::InvalidCollisionDistance);
        }
        if !self.gravity.is_finite() {
            return Err(RopeError::InvalidGravity);
        }
        if self.constraint_iterations == 0 {
            return Err(RopeError::InvalidIterations);
        }
        Ok(())
    }
}

impl<V: Vec> Default for RopeConfig<V> {
    fn default() -> Self {
        Self::new()
    }
}
