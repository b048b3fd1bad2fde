//! Distance constraints between rope particles.

use crate::float::Float;
use crate::vec::Vec;
use crate::particle::Particle;

/// Keeps two particles of the arena at a fixed rest distance.
///
/// The constraint stores indices, not particles. The rope owns the particle
/// arena and passes it to [`satisfy`](DistanceConstraint::satisfy).
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint<V: Vec> {
    pub a: usize,
    pub b: usize,
    pub rest_length: V::Scalar,
}

impl<V: Vec> DistanceConstraint<V> {
    pub fn new(a: usize, b: usize, rest_length: V::Scalar) -> Self {
        DistanceConstraint { a, b, rest_length }
    }

    /// Rest length is measured once, here, and never recomputed.
    pub fn from_particles(a: usize, b: usize, particles: &[Particle<V>]) -> Self {
        let rest_length = particles[a].position.distance(particles[b].position);
        DistanceConstraint { a, b, rest_length }
    }

    /// One relaxation step toward the rest length.
    ///
    /// `stiffness` is the fraction of the full correction applied. Free
    /// pairs split it evenly; if one end is locked the other end takes all
    /// of it; if both are locked nothing moves. Every free particle touched
    /// is then damped by `damping`. Coincident particles have no correction
    /// direction and are skipped.
    pub fn satisfy(&self, particles: &mut [Particle<V>], stiffness: V::Scalar, damping: V::Scalar) {
        let delta = particles[self.b].position - particles[self.a].position;
        let dist = delta.length();
        if dist == V::Scalar::zero() {
            return;
        }

        let diff = (dist - self.rest_length) / dist;
        let correction = delta.scale(diff * stiffness);

        let a_locked = particles[self.a].locked;
        let b_locked = particles[self.b].locked;
        match (a_locked, b_locked) {
            (false, false) => {
                let half = correction.scale(V::Scalar::half());
                particles[self.a].position = particles[self.a].position + half;
                particles[self.b].position = particles[self.b].position - half;
            }
            (true, false) => {
                particles[self.b].position = particles[self.b].position - correction;
            }
            (false, true) => {
                particles[self.a].position = particles[self.a].position + correction;
            }
            (true, true) => return,
        }

        particles[self.a].damp(damping);
        particles[self.b].damp(damping);
    }

    pub fn current_length(&self, particles: &[Particle<V>]) -> V::Scalar {
        particles[self.a].position.distance(particles[self.b].position)
    }

    /// Relative stretch: `(length - rest) / rest`. Zero for a zero rest length.
    pub fn strain(&self, particles: &[Particle<V>]) -> V::Scalar {
        if self.rest_length == V::Scalar::zero() {
            return V::Scalar::zero();
        }
        (self.current_length(particles) - self.rest_length) / self.rest_length
    }
}
