//! Verlet rope built from particles, distance constraints and self-collision.

use crate::float::Float;
use crate::vec::Vec;
use crate::particle::Particle;
use crate::solver::ConstraintSolver;
use crate::config::RopeConfig;
use crate::error::RopeError;
use crate::observer::{NoOpStepObserver, StepObserver};
use alloc::vec::Vec as AllocVec;

/// A rope: an arena of particles linked in index order.
///
/// Particle 0 is locked at construction. Each [`tick`](Rope::tick)
/// integrates, separates folded segments, then relaxes the segment
/// lengths; the renderer reads [`positions`](Rope::positions) afterwards.
pub struct Rope<V: Vec> {
    particles: AllocVec<Particle<V>>,
    solver: ConstraintSolver<V>,
    config: RopeConfig<V>,
}

impl<V: Vec> Rope<V> {
    /// Build a rope through `positions`, in order. Segment rest lengths are
    /// the distances between consecutive positions.
    pub fn from_positions(positions: &[V], config: RopeConfig<V>) -> Result<Self, RopeError> {
        if positions.is_empty() {
            return Err(RopeError::EmptyRope);
        }

        let mut particles: AllocVec<Particle<V>> =
            positions.iter().map(|&p| Particle::new(p)).collect();
        particles[0].lock();
        let solver = ConstraintSolver::chain(&particles);

        Ok(Rope { particles, solver, config })
    }

    /// A straight rope hanging from `start`: particle `i` sits
    /// `i * segment_length` below it.
    pub fn hanging(
        start: V,
        segment_length: V::Scalar,
        count: usize,
        config: RopeConfig<V>,
    ) -> Result<Self, RopeError> {
        let down = -V::up();
        let positions: AllocVec<V> = (0..count)
            .map(|i| start + down.scale(V::Scalar::from_usize(i) * segment_length))
            .collect();
        Self::from_positions(&positions, config)
    }

    /// Advance one frame.
    pub fn tick(&mut self) {
        self.tick_observed(&mut NoOpStepObserver);
    }

    /// Advance one frame, reporting each phase to `observer`.
    ///
    /// Order is fixed: integrate, self-collision passes, constraint passes.
    /// Constraints run last so segment lengths get the final correction.
    pub fn tick_observed<O: StepObserver>(&mut self, observer: &mut O) {
        for p in self.particles.iter_mut() {
            p.apply_verlet(self.config.gravity);
        }
        observer.on_integrate();

        self.solver.relax(&mut self.particles, &self.config, observer);

        observer.on_step_complete();
    }

    pub fn set_locked(&mut self, index: usize, locked: bool) -> Result<(), RopeError> {
        let particle = self.get_mut(index)?;
        if locked {
            particle.lock();
        } else {
            particle.unlock();
        }
        Ok(())
    }

    pub fn lock(&mut self, index: usize) -> Result<(), RopeError> {
        self.set_locked(index, true)
    }

    pub fn unlock(&mut self, index: usize) -> Result<(), RopeError> {
        self.set_locked(index, false)
    }

    pub fn is_locked(&self, index: usize) -> Result<bool, RopeError> {
        self.get(index).map(|p| p.locked)
    }

    /// Drag a locked particle to `position`. The rest of the rope follows on
    /// the next tick.
    pub fn move_particle(&mut self, index: usize, position: V) -> Result<(), RopeError> {
        let particle = self.get_mut(index)?;
        if !particle.locked {
            return Err(RopeError::ParticleNotLocked { index });
        }
        particle.move_to(position);
        Ok(())
    }

    /// Current positions, index-aligned with the construction input.
    pub fn positions(&self) -> AllocVec<V> {
        self.particles.iter().map(|p| p.position).collect()
    }

    /// Copy positions into a renderer-owned buffer of exactly `len()` entries.
    pub fn write_positions(&self, out: &mut [V]) -> Result<(), RopeError> {
        if out.len() != self.particles.len() {
            return Err(RopeError::BufferSizeMismatch {
                expected: self.particles.len(),
                actual: out.len(),
            });
        }
        for (slot, p) in out.iter_mut().zip(self.particles.iter()) {
            *slot = p.position;
        }
        Ok(())
    }

    /// Current length of every segment, in index order.
    pub fn segment_lengths(&self) -> AllocVec<V::Scalar> {
        self.solver
            .constraints()
            .iter()
            .map(|c| c.current_length(&self.particles))
            .collect()
    }

    /// Largest implicit velocity magnitude, `|position - previous_position|`,
    /// over all particles.
    ///
    /// Constraint passes damp `previous_position`, so this is the damped
    /// velocity carried into the next tick, smaller than the distance a
    /// particle actually travelled during the last tick while it is moving.
    pub fn max_displacement(&self) -> V::Scalar {
        self.particles
            .iter()
            .map(|p| p.velocity().length())
            .fold(V::Scalar::zero(), |acc, d| acc.max(d))
    }

    /// Sum of implicit (damped) velocity magnitudes over all particles.
    pub fn total_displacement(&self) -> V::Scalar {
        self.particles
            .iter()
            .fold(V::Scalar::zero(), |acc, p| acc + p.velocity().length())
    }

    /// True once no particle's implicit (damped) velocity exceeds `epsilon`.
    /// See [`max_displacement`](Rope::max_displacement).
    pub fn is_settled(&self, epsilon: V::Scalar) -> bool {
        self.max_displacement() <= epsilon
    }

    pub fn config(&self) -> &RopeConfig<V> {
        &self.config
    }

    /// Mutable access between ticks.
    pub fn config_mut(&mut self) -> &mut RopeConfig<V> {
        &mut self.config
    }

    pub fn set_gravity(&mut self, gravity: V) {
        self.config.gravity = gravity;
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Always false: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.solver.constraint_count()
    }

    pub fn particles(&self) -> &[Particle<V>] {
        &self.particles
    }

    pub fn particle(&self, index: usize) -> Result<&Particle<V>, RopeError> {
        self.get(index)
    }

    fn get(&self, index: usize) -> Result<&Particle<V>, RopeError> {
        let count = self.particles.len();
        self.particles
            .get(index)
            .ok_or(RopeError::ParticleOutOfBounds { index, count })
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Particle<V>, RopeError> {
        let count = self.particles.len();
        self.particles
            .get_mut(index)
            .ok_or(RopeError::ParticleOutOfBounds { index, count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec3;

    #[test]
    fn hanging_layout() {
        let rope: Rope<Vec3<f32>> =
            Rope::hanging(Vec3::new(1.0, 5.0, 2.0), 0.5, 4, RopeConfig::new()).unwrap();
        assert_eq!(rope.len(), 4);
        assert_eq!(rope.segment_count(), 3);
        assert_eq!(rope.positions()[3], Vec3::new(1.0, 3.5, 2.0));
        assert!(rope.is_locked(0).unwrap());
        assert!(!rope.is_locked(3).unwrap());
    }

    #[test]
    fn empty_rope_rejected() {
        let r = Rope::<Vec3<f32>>::from_positions(&[], RopeConfig::new());
        assert_eq!(r.err(), Some(RopeError::EmptyRope));
        let r = Rope::<Vec3<f32>>::hanging(Vec3::zero(), 1.0, 0, RopeConfig::new());
        assert_eq!(r.err(), Some(RopeError::EmptyRope));
    }

    #[test]
    fn out_of_range_lock_reported() {
        let mut rope: Rope<Vec3<f32>> =
            Rope::hanging(Vec3::zero(), 1.0, 3, RopeConfig::new()).unwrap();
        assert_eq!(
            rope.lock(3),
            Err(RopeError::ParticleOutOfBounds { index: 3, count: 3 })
        );
        assert!(rope.is_locked(7).is_err());
    }

    #[test]
    fn write_positions_checks_length() {
        let rope: Rope<Vec3<f32>> =
            Rope::hanging(Vec3::zero(), 1.0, 3, RopeConfig::new()).unwrap();
        let mut short = [Vec3::zero(); 2];
        assert_eq!(
            rope.write_positions(&mut short),
            Err(RopeError::BufferSizeMismatch { expected: 3, actual: 2 })
        );
        let mut buf = [Vec3::zero(); 3];
        rope.write_positions(&mut buf).unwrap();
        assert_eq!(buf[2], Vec3::new(0.0, -2.0, 0.0));
    }

    #[test]
    fn displacement_is_damped_velocity() {
        let config = RopeConfig::new().with_gravity(Vec3::new(0.0f64, -0.02, 0.01));
        let mut rope = Rope::hanging(Vec3::zero(), 1.0, 6, config).unwrap();
        for _ in 0..9 {
            rope.tick();
        }
        let before = rope.positions();
        let implicit = rope
            .particles()
            .iter()
            .map(|p| (p.position - p.previous_position).length())
            .fold(0.0, f64::max);
        assert_eq!(rope.max_displacement(), implicit);

        rope.tick();
        let travelled = before
            .iter()
            .zip(rope.positions().iter())
            .map(|(a, b)| a.distance(*b))
            .fold(0.0, f64::max);
        let carried = rope.max_displacement();
        assert!(carried > 0.0);
        assert!(carried < travelled, "damped {} should trail travelled {}", carried, travelled);
    }

    #[test]
    fn move_requires_lock() {
        let mut rope: Rope<Vec3<f32>> =
            Rope::hanging(Vec3::zero(), 1.0, 3, RopeConfig::new()).unwrap();
        assert_eq!(
            rope.move_particle(1, Vec3::new(1.0, 0.0, 0.0)),
            Err(RopeError::ParticleNotLocked { index: 1 })
        );
        rope.move_particle(0, Vec3::new(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(rope.positions()[0], Vec3::new(1.0, 0.0, 0.0));
    }
}
