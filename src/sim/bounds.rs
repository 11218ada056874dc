//! Playable region of the map

use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::consts::GRID_PIXEL_SIZE;

/// Map dimensions as reported by the tile map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapInfo {
    pub width_tiles: u32,
    pub height_tiles: u32,
    /// Pixels per tile after scaling
    pub grid_pixel_size: f32,
}

impl MapInfo {
    pub fn new(width_tiles: u32, height_tiles: u32) -> Self {
        Self {
            width_tiles,
            height_tiles,
            grid_pixel_size: GRID_PIXEL_SIZE,
        }
    }

    /// Right edge of the map in world pixels
    pub fn end_of_map(&self) -> f32 {
        self.width_tiles as f32 * self.grid_pixel_size
    }

    /// Top edge of the map in world pixels
    pub fn height_px(&self) -> f32 {
        self.height_tiles as f32 * self.grid_pixel_size
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.end_of_map())
    }
}

/// Culling region: `0..end_of_map` horizontally, open upward from `y = 0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub end_of_map: f32,
}

impl Bounds {
    pub fn new(end_of_map: f32) -> Self {
        Self { end_of_map }
    }

    /// True once a body has fully left through the sides or dropped below
    /// the floor. Nothing is culled for rising above the map.
    pub fn is_out(&self, body: &Body) -> bool {
        body.right() < 0.0 || body.left() > self.end_of_map || body.top() < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn ball_at(x: f32, y: f32) -> Body {
        Body::ball(1, Vec2::new(x, y), 10.0, 0).unwrap()
    }

    #[test]
    fn test_map_bounds_from_tiles() {
        let map = MapInfo::new(100, 20);
        assert_eq!(map.end_of_map(), 6400.0);
        assert_eq!(map.height_px(), 1280.0);
        assert_eq!(map.bounds().end_of_map, 6400.0);
    }

    #[test]
    fn test_edges_decide_culling() {
        let bounds = Bounds::new(1000.0);
        // Center past the edge but right edge still on the map
        assert!(!bounds.is_out(&ball_at(-5.0, 100.0)));
        assert!(bounds.is_out(&ball_at(-10.5, 100.0)));
        assert!(!bounds.is_out(&ball_at(1005.0, 100.0)));
        assert!(bounds.is_out(&ball_at(1010.5, 100.0)));
        assert!(!bounds.is_out(&ball_at(100.0, -5.0)));
        assert!(bounds.is_out(&ball_at(100.0, -10.5)));
        // Far above the map stays in play
        assert!(!bounds.is_out(&ball_at(100.0, 1.0e6)));
    }
}
