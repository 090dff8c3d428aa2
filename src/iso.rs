//! Isometric coordinate transform.
//!
//! Every isometric placement (tiles, the player sprite, the camera target)
//! goes through [`world_to_iso`] so they all line up on screen.

use raylib::prelude::Vector2;

/// Project grid coordinates into isometric pixel space.
///
/// `px = (x - y) * tile_w / 2`, `py = (x + y) * tile_h / 2`.
pub fn world_to_iso(x: f32, y: f32, tile_width: f32, tile_height: f32) -> Vector2 {
    Vector2 {
        x: (x - y) * (tile_width * 0.5),
        y: (x + y) * (tile_height * 0.5),
    }
}
