//! Isometric map resource.
//!
//! The map is `width × height` cells with no per-cell data. Cells are
//! enumerated on demand by the render pass; nothing is stored per tile.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

use crate::iso::world_to_iso;

/// Map dimensions in grid units plus the pixel size of one tile.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct IsoGrid {
    pub width: u32,
    pub height: u32,
    pub tile_width: f32,
    pub tile_height: f32,
}

impl Default for IsoGrid {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            tile_width: 64.0,
            tile_height: 32.0,
        }
    }
}

impl IsoGrid {
    pub fn new(width: u32, height: u32, tile_width: f32, tile_height: f32) -> Self {
        Self {
            width,
            height,
            tile_width,
            tile_height,
        }
    }

    pub fn world_to_iso(&self, x: f32, y: f32) -> Vector2 {
        world_to_iso(x, y, self.tile_width, self.tile_height)
    }

    /// Grid position of the middle of the map.
    pub fn center(&self) -> Vector2 {
        Vector2 {
            x: self.width as f32 / 2.0,
            y: self.height as f32 / 2.0,
        }
    }

    /// Whether `pos` is still on the map. Both edges are inclusive.
    pub fn contains(&self, pos: Vector2) -> bool {
        pos.x >= 0.0 && pos.y >= 0.0 && pos.x <= self.width as f32 && pos.y <= self.height as f32
    }

    /// Every cell of the map, column-major like the draw loop walks it.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.width).flat_map(move |x| (0..self.height).map(move |y| (x, y)))
    }

    /// Corners of the tile diamond centered at `center`: top, right, bottom, left.
    pub fn tile_diamond(&self, center: Vector2) -> [Vector2; 4] {
        let hw = self.tile_width * 0.5;
        let hh = self.tile_height * 0.5;
        [
            Vector2 { x: center.x, y: center.y - hh },
            Vector2 { x: center.x + hw, y: center.y },
            Vector2 { x: center.x, y: center.y + hh },
            Vector2 { x: center.x - hw, y: center.y },
        ]
    }
}
