//! Point-mass solver that integrates applied forces
//!
//! The force field only talks to [`ForceSink`]; [`Integrator`] is the
//! default implementation and owns gravity, damping and speed caps.

use glam::Vec2;

use super::body::Body;

/// Anything that accepts forces for the current tick
pub trait ForceSink {
    fn apply_force(&mut self, body: &mut Body, force: Vec2);
}

/// Semi-implicit Euler integrator for dynamic bodies
#[derive(Debug, Clone)]
pub struct Integrator {
    /// Acceleration applied to every body (pixels/s²)
    pub gravity: Vec2,
    /// Fraction of velocity kept per second, shared by all bodies
    pub damping: f32,
}

impl Integrator {
    pub fn new(gravity: Vec2, damping: f32) -> Self {
        Self { gravity, damping }
    }

    /// Advance every body by `dt`, consuming its accumulated force
    pub fn step(&self, bodies: &mut [Body], dt: f32) {
        for body in bodies.iter_mut() {
            self.integrate(body, dt);
        }
    }

    /// `v = v * damping^dt + (g + f/m) * dt`. A body's own damping
    /// replaces the world damping rather than compounding with it.
    fn integrate(&self, body: &mut Body, dt: f32) {
        let damping = body.material.damping.unwrap_or(self.damping);
        let accel = body.force / body.mass + self.gravity;
        body.vel = body.vel * damping.powf(dt) + accel * dt;

        let max_x = body.material.max_horizontal_speed;
        let max_y = body.material.max_vertical_speed;
        body.vel.x = body.vel.x.clamp(-max_x, max_x);
        body.vel.y = body.vel.y.clamp(-max_y, max_y);

        body.pos += body.vel * dt;
        body.force = Vec2::ZERO;
    }
}

impl ForceSink for Integrator {
    fn apply_force(&mut self, body: &mut Body, force: Vec2) {
        body.force += force;
    }
}
