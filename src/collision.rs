//! Self-collision between non-adjacent rope particles.
//!
//! Distance constraints only hold neighbouring particles apart. When the rope
//! folds back on itself, particles far apart in index order can meet; this
//! pass pushes such pairs back out to a minimum separation.

use crate::float::Float;
use crate::vec::Vec;
use crate::particle::Particle;

/// Minimum separation between particles at least `min_index_gap` apart in
/// index order.
///
/// Both parameters are independent: the useful separation scales with
/// segment length, the useful gap with how tightly the rope may curl.
/// A gap of 1 includes constrained neighbours, which usually makes
/// collision and constraint corrections fight each other.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelfCollision<F: Float> {
    pub min_distance: F,
    pub min_index_gap: usize,
}

impl<F: Float> SelfCollision<F> {
    pub fn new(min_distance: F, min_index_gap: usize) -> Self {
        SelfCollision { min_distance, min_index_gap }
    }

    /// A separation of zero turns the pass off.
    pub fn is_enabled(&self) -> bool {
        self.min_distance > F::zero()
    }

    /// Whether particles `i` and `j` are far enough apart in the chain to collide.
    pub fn is_candidate(&self, i: usize, j: usize) -> bool {
        let gap = if i > j { i - j } else { j - i };
        gap >= self.min_index_gap.max(1)
    }

    /// One pass over every candidate pair. Returns how many pairs were pushed.
    ///
    /// A pair closer than `min_distance` is pushed apart along the line
    /// between them by the full overlap: split evenly between free
    /// particles, all onto the free one if the other is locked. Coincident
    /// pairs have no direction and are skipped.
    ///
    /// Pairs are fixed in index order and each push moves the particles
    /// immediately, so a pair that shares a particle with a later push can
    /// end a pass below `min_distance` even if it started above it. Only a
    /// pair with no other close candidate is guaranteed to end at or above
    /// the threshold. Repeated passes converge toward full separation.
    pub fn resolve<V>(&self, particles: &mut [Particle<V>]) -> usize
    where
        V: Vec<Scalar = F>,
    {
        if !self.is_enabled() {
            return 0;
        }
        let gap = self.min_index_gap.max(1);
        let count = particles.len();
        let mut corrected = 0;

        for i in 0..count {
            for j in i.saturating_add(gap)..count {
                if separate(particles, i, j, self.min_distance) {
                    corrected += 1;
                }
            }
        }
        corrected
    }
}

impl<F: Float> Default for SelfCollision<F> {
    fn default() -> Self {
        SelfCollision {
            min_distance: F::from_f32(0.05),
            min_index_gap: 2,
        }
    }
}

fn separate<V: Vec>(particles: &mut [Particle<V>], i: usize, j: usize, min_distance: V::Scalar) -> bool {
    let delta = particles[j].position - particles[i].position;
    let dist = delta.length();
    if dist == V::Scalar::zero() || dist >= min_distance {
        return false;
    }

    let push = delta.scale((min_distance - dist) / dist);
    match (particles[i].locked, particles[j].locked) {
        (false, false) => {
            let half = push.scale(V::Scalar::half());
            particles[i].position = particles[i].position - half;
            particles[j].position = particles[j].position + half;
        }
        (true, false) => {
            particles[j].position = particles[j].position + push;
        }
        (false, true) => {
            particles[i].position = particles[i].position - push;
        }
        (true, true) => return false,
    }
    true
}
