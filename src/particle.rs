//! Verlet particles with position-based dynamics.

use crate::vec::Vec;

/// A Verlet particle: position-based dynamics with implicit velocity.
///
/// Velocity is never stored. It is the difference between `position` and
/// `previous_position`, so anything that moves `position` alone (constraint
/// and collision corrections) also changes the particle's velocity for the
/// next tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<V: Vec> {
    pub position: V,
    pub previous_position: V,
    pub locked: bool,
}

impl<V: Vec> Particle<V> {
    /// A free particle at rest.
    pub fn new(position: V) -> Self {
        Particle {
            position,
            previous_position: position,
            locked: false,
        }
    }

    /// A particle pinned in space.
    pub fn locked(position: V) -> Self {
        Particle {
            position,
            previous_position: position,
            locked: true,
        }
    }

    /// Advance one tick: `position += (position - previous_position) + gravity`.
    ///
    /// Gravity is a per-tick displacement, not an acceleration; there is no
    /// time step. Locked particles are left untouched.
    pub fn apply_verlet(&mut self, gravity: V) {
        if self.locked {
            return;
        }
        let temp = self.position;
        let velocity = self.position - self.previous_position;
        self.position = self.position + velocity + gravity;
        self.previous_position = temp;
    }

    /// Bleed implicit velocity: `previous = position + (previous - position) * factor`.
    pub fn damp(&mut self, factor: V::Scalar) {
        if self.locked {
            return;
        }
        let velocity = self.previous_position - self.position;
        self.previous_position = self.position + velocity.scale(factor);
    }

    pub fn velocity(&self) -> V {
        self.position - self.previous_position
    }

    pub fn lock(&mut self) {
        self.locked = true;
        self.previous_position = self.position;
    }

    /// Release the particle. It starts at rest from wherever it was pinned.
    pub fn unlock(&mut self) {
        self.locked = false;
        self.previous_position = self.position;
    }

    /// Teleport a locked particle. Free particles ignore the request, they
    /// are moved by the solver only.
    pub fn move_to(&mut self, position: V) {
        if self.locked {
            self.position = position;
            self.previous_position = position;
        }
    }
}
