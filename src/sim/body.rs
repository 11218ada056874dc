//! Dynamic bodies and their spawn parameters

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// What a body is, as far as the force field cares
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BodyKind {
    /// Responder: pushed by magnets, exerts nothing
    Ball { radius: f32 },
    /// Emitter: carries a strength and is pulled by every ball
    Magnet,
}

/// Surface and motion limits handed to the solver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Contact friction. Only a collider-aware solver reads this; the
    /// point-mass [`Integrator`](super::solver::Integrator) has no contacts.
    pub friction: f32,
    /// Restitution on contact. Same caveat as `friction`.
    pub elasticity: f32,
    /// Fraction of velocity kept per second. Replaces the world damping
    /// for this body when set.
    pub damping: Option<f32>,
    pub max_horizontal_speed: f32,
    pub max_vertical_speed: f32,
}

impl Material {
    pub fn ball() -> Self {
        Self {
            friction: BODY_FRICTION,
            elasticity: BALL_ELASTICITY,
            damping: Some(BODY_DAMPING),
            max_horizontal_speed: MAX_HORIZONTAL_SPEED,
            max_vertical_speed: MAX_VERTICAL_SPEED,
        }
    }

    pub fn magnet() -> Self {
        Self {
            elasticity: MAGNET_ELASTICITY,
            ..Self::ball()
        }
    }

    /// Override the speed caps (from settings)
    pub fn with_speed_caps(mut self, horizontal: f32, vertical: f32) -> Self {
        self.max_horizontal_speed = horizontal;
        self.max_vertical_speed = vertical;
        self
    }
}

/// A dynamic body in the sandbox
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub id: u32,
    pub kind: BodyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Force accumulated since the last solver step
    #[serde(skip)]
    pub force: Vec2,
    /// Half width / half height of the bounding box
    pub half_extents: Vec2,
    pub mass: f32,
    /// Magnet strength (zero for balls)
    pub strength: f32,
    pub material: Material,
    /// 0xRRGGBB tint for whoever draws the body
    pub color: u32,
}

/// Rejected spawn request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnError {
    /// Spawn position is NaN or infinite
    NonFinitePosition,
    /// Ball radius must be positive and finite
    InvalidRadius(f32),
    /// Magnet strength must be finite
    InvalidStrength(f32),
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::NonFinitePosition => write!(f, "spawn position is not finite"),
            SpawnError::InvalidRadius(r) => write!(f, "invalid ball radius {r}"),
            SpawnError::InvalidStrength(s) => write!(f, "invalid magnet strength {s}"),
        }
    }
}

impl std::error::Error for SpawnError {}

impl Body {
    /// Create a ball of the given radius centered at `pos`
    pub fn ball(id: u32, pos: Vec2, radius: f32, color: u32) -> Result<Self, SpawnError> {
        if !pos.is_finite() {
            return Err(SpawnError::NonFinitePosition);
        }
        let mass = radius * radius / BALL_MASS_DIVISOR;
        if !(radius.is_finite() && radius > 0.0 && mass.is_finite() && mass > 0.0) {
            return Err(SpawnError::InvalidRadius(radius));
        }
        Ok(Self {
            id,
            kind: BodyKind::Ball { radius },
            pos,
            vel: Vec2::ZERO,
            force: Vec2::ZERO,
            half_extents: Vec2::splat(radius),
            mass,
            strength: 0.0,
            material: Material::ball(),
            color,
        })
    }

    /// Create a magnet with the given strength centered at `pos`
    pub fn magnet(id: u32, pos: Vec2, strength: f32) -> Result<Self, SpawnError> {
        if !pos.is_finite() {
            return Err(SpawnError::NonFinitePosition);
        }
        if !strength.is_finite() {
            return Err(SpawnError::InvalidStrength(strength));
        }
        Ok(Self {
            id,
            kind: BodyKind::Magnet,
            pos,
            vel: Vec2::ZERO,
            force: Vec2::ZERO,
            half_extents: Vec2::splat(MAGNET_HALF_SIZE),
            mass: MAGNET_MASS,
            strength,
            material: Material::magnet(),
            color: 0xFFFFFF,
        })
    }

    pub fn is_magnet(&self) -> bool {
        matches!(self.kind, BodyKind::Magnet)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.half_extents.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.half_extents.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y - self.half_extents.y
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.half_extents.y
    }
}
