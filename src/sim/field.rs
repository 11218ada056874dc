//! Magnet force field
//!
//! Every magnet interacts with every ball through a per-axis inverse-square
//! law: each axis is scaled by its own squared separation instead of the
//! Euclidean distance. Magnets are pulled with a small factor, balls are
//! pushed with a factor 100 times larger. Both quirks are gameplay tuning
//! and are kept exactly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::bounds::Bounds;
use super::solver::ForceSink;
use crate::consts::{EMITTER_FORCE_SCALE, MIN_AXIS_DELTA, RESPONDER_FORCE_SCALE};

/// Numeric guard for near-coincident bodies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldPolicy {
    /// Per-axis separation below which the denominator stops shrinking.
    /// Caps every force component at `scale * strength / min_axis_delta²`.
    pub min_axis_delta: f32,
}

impl Default for FieldPolicy {
    fn default() -> Self {
        Self {
            min_axis_delta: MIN_AXIS_DELTA,
        }
    }
}

impl FieldPolicy {
    /// Squared separation on one axis, clamped to the policy floor
    #[inline]
    fn denom(&self, delta: f32) -> f32 {
        let floor = self.min_axis_delta * self.min_axis_delta;
        (delta * delta).max(floor)
    }
}

/// Forces produced by one magnet/ball pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairForces {
    pub on_emitter: Vec2,
    pub on_responder: Vec2,
}

/// Compute the forces between an emitter and a responder.
///
/// Returns `None` if either position is not finite.
pub fn pair_forces(emitter: &Body, responder: &Body, policy: &FieldPolicy) -> Option<PairForces> {
    if !emitter.pos.is_finite() || !responder.pos.is_finite() {
        return None;
    }

    let d = emitter.pos - responder.pos;
    let (dx2, dy2) = (policy.denom(d.x), policy.denom(d.y));
    let pull = EMITTER_FORCE_SCALE * emitter.strength;
    let push = RESPONDER_FORCE_SCALE * emitter.strength;

    Some(PairForces {
        on_emitter: Vec2::new(pull / dx2, pull / dy2),
        on_responder: Vec2::new(push / dx2, push / dy2),
    })
}

/// Run one tick of the field: apply pair forces through `sink`, then drop
/// every body that has left `bounds`.
pub fn step<S: ForceSink>(
    emitters: &mut Vec<Body>,
    responders: &mut Vec<Body>,
    bounds: &Bounds,
    policy: &FieldPolicy,
    sink: &mut S,
) {
    for emitter in emitters.iter_mut() {
        for responder in responders.iter_mut() {
            match pair_forces(emitter, responder, policy) {
                Some(forces) => {
                    sink.apply_force(emitter, forces.on_emitter);
                    sink.apply_force(responder, forces.on_responder);
                }
                None => log::warn!(
                    "Skipping pair {}/{}: non-finite position",
                    emitter.id,
                    responder.id
                ),
            }
        }
    }

    cull(emitters, bounds);
    cull(responders, bounds);
}

/// Remove out-of-bounds bodies, returning how many were dropped
pub fn cull(bodies: &mut Vec<Body>, bounds: &Bounds) -> usize {
    let before = bodies.len();
    bodies.retain(|body| {
        let out = bounds.is_out(body);
        if out {
            log::debug!("Body {} left the map at ({:.1}, {:.1})", body.id, body.pos.x, body.pos.y);
        }
        !out
    });
    before - bodies.len()
}
