//! Shared 2D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera2D`]. The camera `target` holds the
//! isometric pixel position being followed and `offset` holds half the
//! viewport, so whatever sits at `target` is drawn in the middle of the screen.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

use crate::resources::screensize::ScreenSize;

/// ECS resource that holds the active 2D camera parameters.
#[derive(Resource, Clone, Copy)]
pub struct Camera2DRes(pub Camera2D);

impl Camera2DRes {
    /// Camera looking at the iso origin, centered on a viewport of `screen`.
    pub fn centered(screen: ScreenSize) -> Self {
        Self(Camera2D {
            target: Vector2 { x: 0.0, y: 0.0 },
            offset: Vector2 {
                x: (screen.w / 2) as f32,
                y: (screen.h / 2) as f32,
            },
            rotation: 0.0,
            zoom: 1.0,
        })
    }

    /// Screen position of an isometric pixel position.
    ///
    /// Same transform raylib applies inside 2D mode at zoom 1 and no rotation.
    pub fn screen_position(&self, iso: Vector2) -> Vector2 {
        Vector2 {
            x: iso.x - self.0.target.x + self.0.offset.x,
            y: iso.y - self.0.target.y + self.0.offset.y,
        }
    }
}
