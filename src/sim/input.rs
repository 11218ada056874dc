//! Per-frame input snapshot
//!
//! The host collects key and mouse events between frames and hands them
//! over in one [`InputSnapshot`]; the simulation never reads device state.

use glam::Vec2;

use crate::consts::{CHARGE_LIMIT, CHARGE_START};

/// Held direction keys (arrows or WASD)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Spawns balls
    Left,
    /// Spawns magnets
    Right,
}

/// Discrete mouse transitions since the last frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(MouseButton),
    /// Release at a window-space position
    Release { button: MouseButton, screen_pos: Vec2 },
}

/// Everything the simulation needs to know about the player for one frame
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    pub keys: KeyState,
    /// Events in the order they happened
    pub pointer: Vec<PointerEvent>,
    /// Restart the session
    pub reset: bool,
}

/// Grows while a mouse button is held; the value becomes ball radius or
/// magnet strength on release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChargeMeter {
    held: bool,
    value: u32,
}

impl ChargeMeter {
    pub fn press(&mut self) {
        self.held = true;
        self.value = CHARGE_START;
    }

    /// Stop charging and return the charge built up so far
    pub fn release(&mut self) -> u32 {
        self.held = false;
        self.value
    }

    /// Once per frame
    pub fn tick(&mut self) {
        if self.held && self.value <= CHARGE_LIMIT {
            self.value += 1;
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}
