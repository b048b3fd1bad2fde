//! Error types for rope operations.

use core::fmt;

/// Errors reported to callers of the rope API.
///
/// Degenerate geometry (coincident particles) is never an error; the
/// solver skips it silently.
#[derive(Debug, Clone, PartialEq)]
pub enum RopeError {
    /// A rope needs at least one particle.
    EmptyRope,
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
    /// Only locked particles can be moved directly.
    ParticleNotLocked { index: usize },
    /// An output buffer does not match the particle count.
    BufferSizeMismatch { expected: usize, actual: usize },
    /// Damping must be in (0, 1].
    InvalidDamping,
    /// Stiffness must be in (0, 1].
    InvalidStiffness,
    /// Self-collision distance must be finite and non-negative.
    InvalidCollisionDistance,
    /// Gravity must be finite.
    InvalidGravity,
    /// At least one constraint pass is required.
    InvalidIterations,
}

impl fmt::Display for RopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RopeError::EmptyRope => write!(f, "rope needs at least one particle"),
            RopeError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            RopeError::ParticleNotLocked { index } => {
                write!(f, "particle {} is not locked and cannot be moved directly", index)
            }
            RopeError::BufferSizeMismatch { expected, actual } => {
                write!(f, "buffer holds {} positions, rope has {}", actual, expected)
            }
            RopeError::InvalidDamping => write!(f, "damping must be in (0, 1]"),
            RopeError::InvalidStiffness => write!(f, "stiffness must be in (0, 1]"),
            RopeError::InvalidCollisionDistance => {
                write!(f, "self-collision distance must be finite and non-negative")
            }
            RopeError::InvalidGravity => write!(f, "gravity must be finite"),
            RopeError::InvalidIterations => write!(f, "at least one constraint iteration is required"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RopeError {}
