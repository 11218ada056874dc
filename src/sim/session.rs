//! Simulation session and the per-frame update
//!
//! Everything the game mutates lives in [`Session`]; the host owns it and
//! calls [`Session::update`] once per frame with that frame's input.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::{Body, Material, SpawnError};
use super::bounds::{Bounds, MapInfo};
use super::camera::{Camera, CameraBounds};
use super::field;
use super::input::{ChargeMeter, InputSnapshot, MouseButton, PointerEvent};
use super::solver::Integrator;
use crate::consts::SIM_DT;
use crate::pack_rgb;
use crate::settings::Settings;

/// One play session on one map
#[derive(Debug, Clone)]
pub struct Session {
    pub settings: Settings,
    pub map: MapInfo,
    pub bounds: Bounds,
    pub camera: Camera,
    /// Magnets, in spawn order
    pub emitters: Vec<Body>,
    /// Balls, in spawn order
    pub responders: Vec<Body>,
    pub integrator: Integrator,
    /// Left button: ball radius
    pub ball_charge: ChargeMeter,
    /// Right button: magnet strength
    pub magnet_charge: ChargeMeter,
    /// Frames simulated since the session started
    pub frame_count: u64,
    rng: Pcg32,
    next_id: u32,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        let map = settings.map();
        let window = settings.window();
        let mut camera = Camera::new(CameraBounds::for_map(&map, window), window);
        // Snap toward the start position before the first frame
        camera.pan(SIM_DT, 1.0);

        log::info!(
            "Session started: map {}x{} tiles, end of map at {}px, seed {}",
            map.width_tiles,
            map.height_tiles,
            map.end_of_map(),
            settings.seed
        );

        Self {
            map,
            bounds: map.bounds(),
            camera,
            emitters: Vec::new(),
            responders: Vec::new(),
            integrator: Integrator::new(settings.gravity_vec(), settings.damping),
            ball_charge: ChargeMeter::default(),
            magnet_charge: ChargeMeter::default(),
            frame_count: 0,
            rng: Pcg32::seed_from_u64(settings.seed),
            next_id: 1,
            settings,
        }
    }

    /// Start over with the same settings
    pub fn reset(&mut self) {
        log::info!("Session reset after {} frames", self.frame_count);
        *self = Self::new(self.settings.clone());
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn material(&self, base: Material) -> Material {
        base.with_speed_caps(
            self.settings.max_horizontal_speed,
            self.settings.max_vertical_speed,
        )
    }

    /// Spawn a ball at a world position. A rejected ball consumes no id
    /// and no colour.
    pub fn spawn_ball(&mut self, pos: Vec2, radius: f32) -> Result<u32, SpawnError> {
        let mut ball = Body::ball(0, pos, radius, 0)?;
        ball.color = pack_rgb(
            self.rng.random_range(50..=255),
            self.rng.random_range(50..=255),
            self.rng.random_range(0..=155),
        );
        let id = self.next_entity_id();
        ball.id = id;
        ball.material = self.material(ball.material);
        log::debug!("Ball {} spawned at ({:.1}, {:.1}) r={}", id, pos.x, pos.y, radius);
        self.responders.push(ball);
        Ok(id)
    }

    /// Spawn a magnet at a world position
    pub fn spawn_magnet(&mut self, pos: Vec2, strength: f32) -> Result<u32, SpawnError> {
        let mut magnet = Body::magnet(0, pos, strength)?;
        let id = self.next_entity_id();
        magnet.id = id;
        magnet.material = self.material(magnet.material);
        log::debug!("Magnet {} spawned at ({:.1}, {:.1}) s={}", id, pos.x, pos.y, strength);
        self.emitters.push(magnet);
        Ok(id)
    }

    fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press(MouseButton::Left) => self.ball_charge.press(),
            PointerEvent::Press(MouseButton::Right) => self.magnet_charge.press(),
            PointerEvent::Release { button, screen_pos } => {
                let world = self.camera.screen_to_world(screen_pos);
                let spawned = match button {
                    MouseButton::Left => {
                        let radius = self.ball_charge.release() as f32;
                        self.spawn_ball(world, radius)
                    }
                    MouseButton::Right => {
                        let strength = self.magnet_charge.release() as f32;
                        self.spawn_magnet(world, strength)
                    }
                };
                if let Err(e) = spawned {
                    log::warn!("Spawn ignored: {}", e);
                }
            }
        }
    }

    /// Advance the session by one frame
    pub fn update(&mut self, input: &InputSnapshot, dt: f32) {
        if input.reset {
            self.reset();
        }

        // Spawns land before any physics for this frame
        for event in &input.pointer {
            self.handle_pointer(*event);
        }

        self.integrator.step(&mut self.emitters, dt);
        self.integrator.step(&mut self.responders, dt);

        self.camera.steer(&input.keys);

        field::step(
            &mut self.emitters,
            &mut self.responders,
            &self.bounds,
            &self.settings.field,
            &mut self.integrator,
        );

        self.ball_charge.tick();
        self.magnet_charge.tick();

        self.camera.pan(dt, self.settings.camera_pan_speed);
        self.frame_count += 1;
    }

    /// Total live bodies
    pub fn body_count(&self) -> usize {
        self.emitters.len() + self.responders.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::BodyKind;
    use crate::sim::input::KeyState;

    fn weightless() -> Settings {
        Settings {
            gravity: 0.0,
            ..Default::default()
        }
    }

    fn release(button: MouseButton, x: f32, y: f32) -> PointerEvent {
        PointerEvent::Release {
            button,
            screen_pos: Vec2::new(x, y),
        }
    }

    #[test]
    fn test_click_spawns_ball_at_world_position() {
        let mut session = Session::new(Settings::default());
        let screen = Vec2::new(100.0, 200.0);
        let expected = session.camera.screen_to_world(screen);

        let input = InputSnapshot {
            pointer: vec![
                PointerEvent::Press(MouseButton::Left),
                release(MouseButton::Left, screen.x, screen.y),
            ],
            ..Default::default()
        };
        session.update(&input, SIM_DT);

        assert_eq!(session.responders.len(), 1);
        let ball = &session.responders[0];
        assert_eq!(ball.kind, BodyKind::Ball { radius: 5.0 });
        assert_eq!(ball.pos.x, expected.x);
        // Gravity already acted for one frame
        assert!(ball.pos.y < expected.y);
    }

    #[test]
    fn test_held_button_charges_magnet() {
        let mut session = Session::new(weightless());
        session.update(
            &InputSnapshot {
                pointer: vec![PointerEvent::Press(MouseButton::Right)],
                ..Default::default()
            },
            SIM_DT,
        );
        session.update(&InputSnapshot::default(), SIM_DT);
        session.update(
            &InputSnapshot {
                pointer: vec![release(MouseButton::Right, 640.0, 360.0)],
                ..Default::default()
            },
            SIM_DT,
        );

        assert_eq!(session.emitters.len(), 1);
        assert_eq!(session.emitters[0].strength, 7.0);
        assert!(!session.magnet_charge.is_held());
    }

    #[test]
    fn test_magnet_and_ball_push_apart() {
        let mut session = Session::new(weightless());
        session.spawn_magnet(Vec2::new(1000.0, 500.0), 10.0).unwrap();
        session.spawn_ball(Vec2::new(1100.0, 600.0), 10.0).unwrap();

        // First frame applies the force, second integrates it
        session.update(&InputSnapshot::default(), SIM_DT);
        session.update(&InputSnapshot::default(), SIM_DT);

        let magnet = &session.emitters[0];
        let ball = &session.responders[0];
        assert!(magnet.vel.x < 0.0 && magnet.vel.y < 0.0);
        assert!(ball.vel.x > 0.0 && ball.vel.y > 0.0);
    }

    #[test]
    fn test_rejected_spawn_keeps_ids_and_colours() {
        let mut clean = Session::new(weightless());
        let mut noisy = Session::new(weightless());

        assert!(noisy.spawn_ball(Vec2::new(500.0, 500.0), 1e-25).is_err());
        assert!(noisy.spawn_magnet(Vec2::new(500.0, 500.0), f32::NAN).is_err());
        assert_eq!(noisy.body_count(), 0);

        let a = clean.spawn_ball(Vec2::new(500.0, 500.0), 5.0).unwrap();
        let b = noisy.spawn_ball(Vec2::new(500.0, 500.0), 5.0).unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, 1);
        assert_eq!(clean.responders[0].color, noisy.responders[0].color);
    }

    #[test]
    fn test_tiny_ball_never_enters_play() {
        let mut session = Session::new(Settings::default());
        assert!(session.spawn_ball(Vec2::new(500.0, 500.0), 1e-25).is_err());
        session.spawn_magnet(Vec2::new(520.0, 520.0), 10.0).unwrap();
        session.spawn_ball(Vec2::new(560.0, 560.0), 5.0).unwrap();
        for _ in 0..120 {
            session.update(&InputSnapshot::default(), SIM_DT);
            for body in session.emitters.iter().chain(&session.responders) {
                assert!(body.pos.is_finite());
                assert!(body.mass > 0.0);
            }
        }
    }

    #[test]
    fn test_falling_ball_is_culled() {
        let mut session = Session::new(Settings::default());
        session.spawn_ball(Vec2::new(500.0, 100.0), 5.0).unwrap();
        for _ in 0..60 {
            session.update(&InputSnapshot::default(), SIM_DT);
        }
        assert!(session.responders.is_empty());
        assert_eq!(session.body_count(), 0);
    }

    #[test]
    fn test_reset_clears_bodies() {
        let mut session = Session::new(weightless());
        session.spawn_ball(Vec2::new(500.0, 500.0), 5.0).unwrap();
        session.spawn_magnet(Vec2::new(700.0, 500.0), 5.0).unwrap();
        session.update(&InputSnapshot::default(), SIM_DT);
        assert_eq!(session.body_count(), 2);

        session.update(
            &InputSnapshot {
                reset: true,
                ..Default::default()
            },
            SIM_DT,
        );
        assert_eq!(session.body_count(), 0);
        assert_eq!(session.frame_count, 1);
        assert_eq!(session.next_entity_id(), 1);
    }

    #[test]
    fn test_keys_move_camera() {
        let mut session = Session::new(Settings::default());
        let start = session.camera.position;
        let input = InputSnapshot {
            keys: KeyState {
                right: true,
                ..Default::default()
            },
            ..Default::default()
        };
        for _ in 0..30 {
            session.update(&input, SIM_DT);
        }
        assert!(session.camera.position.x > start.x);
    }

    #[test]
    fn test_determinism() {
        let run = || {
            let mut session = Session::new(Settings::default());
            let input = InputSnapshot {
                pointer: vec![
                    PointerEvent::Press(MouseButton::Left),
                    release(MouseButton::Left, 300.0, 600.0),
                    PointerEvent::Press(MouseButton::Right),
                    release(MouseButton::Right, 340.0, 650.0),
                ],
                ..Default::default()
            };
            session.update(&input, SIM_DT);
            for _ in 0..20 {
                session.update(&InputSnapshot::default(), SIM_DT);
            }
            session
        };

        let a = run();
        let b = run();
        assert_eq!(a.responders.len(), b.responders.len());
        for (x, y) in a.responders.iter().zip(&b.responders) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.color, y.color);
        }
        for (x, y) in a.emitters.iter().zip(&b.emitters) {
            assert_eq!(x.pos, y.pos);
        }
    }
}
