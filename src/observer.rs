//! Step observer trait for monitoring rope ticks.

/// Trait for observing rope simulation ticks.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after all particles have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after each self-collision pass with the number of pairs pushed apart.
    fn on_collision_iteration(&mut self, _iteration: usize, _corrected_pairs: usize) {}

    /// Called after each constraint iteration.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called when a tick is fully complete and positions are final.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Used by [`Rope::tick`](crate::Rope::tick).
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
