//! Magnet Sandbox entry point
//!
//! Headless driver: builds a session, replays a scripted set of clicks and
//! key presses on a fixed timestep, and logs what happens to the bodies.
//!
//! Usage: `magnet-sandbox [settings.json]`

use glam::Vec2;

use magnet_sandbox::Settings;
use magnet_sandbox::consts::*;
use magnet_sandbox::sim::{InputSnapshot, KeyState, MouseButton, PointerEvent, Session};

/// Frames to simulate
const RUN_FRAMES: u64 = 600;

/// Scripted player input for a given frame
fn scripted_input(frame: u64) -> InputSnapshot {
    let mut input = InputSnapshot::default();
    match frame {
        // Drop a magnet in the middle of the screen, charged for 20 frames
        10 => input.pointer.push(PointerEvent::Press(MouseButton::Right)),
        30 => input.pointer.push(PointerEvent::Release {
            button: MouseButton::Right,
            screen_pos: Vec2::new(WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0),
        }),
        // A row of small balls above it
        40..=44 => {
            let x = 500.0 + (frame - 40) as f32 * 70.0;
            input.pointer.push(PointerEvent::Press(MouseButton::Left));
            input.pointer.push(PointerEvent::Release {
                button: MouseButton::Left,
                screen_pos: Vec2::new(x, 600.0),
            });
        }
        // Scroll right for a second
        120..=180 => {
            input.keys = KeyState {
                right: true,
                ..Default::default()
            }
        }
        _ => {}
    }
    input
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Magnet Sandbox (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    let mut session = Session::new(settings);

    // Host frames arrive at ~50 Hz; the sim runs at SIM_DT
    let frame_dt = 0.02;
    let mut accumulator = 0.0;
    let mut next_input = 0;

    while session.frame_count < RUN_FRAMES {
        accumulator += frame_dt;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = scripted_input(next_input);
            session.update(&input, SIM_DT);
            next_input += 1;
            accumulator -= SIM_DT;
            substeps += 1;
        }

        if session.frame_count % 60 == 0 {
            log::info!(
                "frame {}: {} magnets, {} balls, camera at ({:.0}, {:.0})",
                session.frame_count,
                session.emitters.len(),
                session.responders.len(),
                session.camera.position.x,
                session.camera.position.y
            );
        }
    }

    log::info!(
        "Done after {} frames with {} bodies in play",
        session.frame_count,
        session.body_count()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless driver on the web
}
