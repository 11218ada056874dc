//! Frame simulation module
//!
//! All gameplay logic lives here. This module must stay host-agnostic:
//! - Input arrives as a per-frame snapshot
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod body;
pub mod bounds;
pub mod camera;
pub mod field;
pub mod input;
pub mod session;
pub mod solver;

pub use body::{Body, BodyKind, Material, SpawnError};
pub use bounds::{Bounds, MapInfo};
pub use camera::{Camera, CameraBounds};
pub use field::{FieldPolicy, PairForces, pair_forces};
pub use input::{ChargeMeter, InputSnapshot, KeyState, MouseButton, PointerEvent};
pub use session::Session;
pub use solver::{ForceSink, Integrator};
