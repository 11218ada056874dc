//! Magnet Sandbox - a 2D physics toy on a tile map
//!
//! Core modules:
//! - `sim`: Frame simulation (bodies, force field, solver, camera, input)
//! - `settings`: Data-driven session configuration

pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per rendered frame at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Window defaults
    pub const WINDOW_WIDTH: f32 = 1280.0;
    pub const WINDOW_HEIGHT: f32 = 720.0;

    /// Map tiles are 32px source art scaled up
    pub const TILE_SCALING: f32 = 2.0;
    pub const GRID_PIXEL_SIZE: f32 = 32.0 * TILE_SCALING;

    /// Fraction used when easing the camera toward its target
    pub const CAMERA_PAN_SPEED: f32 = 0.30;
    /// Camera target offset per frame while a direction key is held
    pub const CAMERA_STEP: f32 = 100.0;

    /// World physics
    pub const GRAVITY: f32 = 2000.0;
    /// Fraction of velocity kept per second (1.0 = no loss)
    pub const DEFAULT_DAMPING: f32 = 1.0;
    pub const MAX_HORIZONTAL_SPEED: f32 = 450.0;
    pub const MAX_VERTICAL_SPEED: f32 = 1000.0;

    /// Force field scales: emitters are pulled with the small factor,
    /// responders pushed with the large one
    pub const EMITTER_FORCE_SCALE: f32 = -100.0;
    pub const RESPONDER_FORCE_SCALE: f32 = 10_000.0;
    /// Smallest per-axis separation used in force denominators (pixels)
    pub const MIN_AXIS_DELTA: f32 = 1.0;

    /// Mouse hold charge (ball radius / magnet strength)
    pub const CHARGE_START: u32 = 5;
    pub const CHARGE_LIMIT: u32 = 50;

    /// Spawned body material
    pub const BODY_FRICTION: f32 = 0.75;
    pub const BALL_ELASTICITY: f32 = 0.75;
    pub const MAGNET_ELASTICITY: f32 = 0.25;
    pub const BODY_DAMPING: f32 = 1.0;
    pub const MAGNET_MASS: f32 = 20.0;
    /// Ball mass is radius² divided by this
    pub const BALL_MASS_DIVISOR: f32 = 250.0;
    /// Magnet sprite is 64px art drawn at half scale
    pub const MAGNET_HALF_SIZE: f32 = 16.0;
}

/// Linear interpolation between two points
#[inline]
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// Frame-rate independent smoothing toward `b`.
///
/// `half_life` is the time (seconds) needed to cover half of the remaining
/// distance. A non-positive half life snaps straight to `b`.
#[inline]
pub fn smerp(a: Vec2, b: Vec2, dt: f32, half_life: f32) -> Vec2 {
    if half_life <= 0.0 {
        return b;
    }
    lerp(a, b, 1.0 - 2f32.powf(-dt / half_life))
}

/// Pack 8-bit RGB channels into `0xRRGGBB`
#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smerp_half_life() {
        let p = smerp(Vec2::ZERO, Vec2::new(100.0, 0.0), 0.5, 0.5);
        assert!((p.x - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_smerp_zero_half_life_snaps() {
        let p = smerp(Vec2::ZERO, Vec2::new(3.0, 4.0), 0.016, 0.0);
        assert_eq!(p, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_pack_rgb() {
        assert_eq!(pack_rgb(0x12, 0x34, 0x56), 0x123456);
    }
}
