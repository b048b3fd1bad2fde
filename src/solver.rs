//! Iterative constraint solver for rope particles.

use crate::vec::Vec;
use crate::particle::Particle;
use crate::constraint::DistanceConstraint;
use crate::config::RopeConfig;
use crate::observer::StepObserver;
use alloc::vec::Vec as AllocVec;

/// Relaxes a particle arena against its distance constraints and the
/// self-collision pass.
///
/// Constraints are applied in insertion order, Gauss-Seidel style: each one
/// sees the corrections of the ones before it in the same pass.
pub struct ConstraintSolver<V: Vec> {
    constraints: AllocVec<DistanceConstraint<V>>,
}

impl<V: Vec> ConstraintSolver<V> {
    pub fn new() -> Self {
        ConstraintSolver {
            constraints: AllocVec::new(),
        }
    }

    /// One constraint per adjacent pair `(i, i + 1)`, rest lengths measured
    /// from the particles' current positions.
    pub fn chain(particles: &[Particle<V>]) -> Self {
        let constraints = (1..particles.len())
            .map(|i| DistanceConstraint::from_particles(i - 1, i, particles))
            .collect();
        ConstraintSolver { constraints }
    }

    pub fn add_constraint(&mut self, constraint: DistanceConstraint<V>) {
        self.constraints.push(constraint);
    }

    /// Self-collision passes followed by constraint passes, as configured.
    pub fn relax<O: StepObserver>(
        &self,
        particles: &mut [Particle<V>],
        config: &RopeConfig<V>,
        observer: &mut O,
    ) {
        for i in 0..config.collision_iterations {
            let corrected = config.self_collision.resolve(particles);
            observer.on_collision_iteration(i, corrected);
        }

        for i in 0..config.constraint_iterations {
            for c in self.constraints.iter() {
                c.satisfy(particles, config.stiffness, config.damping);
            }
            observer.on_constraint_iteration(i);
        }
    }

    pub fn constraints(&self) -> &[DistanceConstraint<V>] {
        &self.constraints
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}

impl<V: Vec> Default for ConstraintSolver<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec3;
    use crate::float::Float;

    struct Counter {
        collision: usize,
        constraint: usize,
    }

    impl StepObserver for Counter {
        fn on_collision_iteration(&mut self, _iteration: usize, _corrected: usize) {
            self.collision += 1;
        }
        fn on_constraint_iteration(&mut self, _iteration: usize) {
            self.constraint += 1;
        }
    }

    #[test]
    fn chain_links_neighbours() {
        let particles: AllocVec<_> = (0..4)
            .map(|i| Particle::new(Vec3::new(0.0f32, -(i as f32) * 2.0, 0.0)))
            .collect();
        let solver = ConstraintSolver::chain(&particles);
        assert_eq!(solver.constraint_count(), 3);
        for (i, c) in solver.constraints().iter().enumerate() {
            assert_eq!((c.a, c.b), (i, i + 1));
            assert!((c.rest_length - 2.0).abs() < 1e-6);
        }
    }

    #[test]
    fn chain_of_one_has_no_constraints() {
        let particles = [Particle::new(Vec3::new(0.0f32, 0.0, 0.0))];
        assert_eq!(ConstraintSolver::chain(&particles).constraint_count(), 0);
    }

    #[test]
    fn relax_runs_configured_passes() {
        let mut particles = [
            Particle::locked(Vec3::new(0.0f64, 0.0, 0.0)),
            Particle::new(Vec3::new(0.0f64, -3.0, 0.0)),
        ];
        let mut solver = ConstraintSolver::new();
        solver.add_constraint(DistanceConstraint::new(0, 1, 1.0));
        let config = RopeConfig::new()
            .with_constraint_iterations(7)
            .with_collision_iterations(2);
        let mut counter = Counter { collision: 0, constraint: 0 };
        solver.relax(&mut particles, &config, &mut counter);
        assert_eq!(counter.collision, 2);
        assert_eq!(counter.constraint, 7);
        // Each pass closes half the remaining gap.
        let expected = 1.0 + 2.0 / 128.0;
        assert!((particles[1].position.y + expected).abs() < 1e-12);
    }
}
