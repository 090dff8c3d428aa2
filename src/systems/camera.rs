//! Camera follow system.
//!
//! Points the shared [`Camera2DRes`] at the player's isometric position every
//! frame. No smoothing and no clamping: the player stays dead center.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::isogrid::IsoGrid;

pub fn camera_follow(
    query: Query<&MapPosition, With<Player>>,
    grid: Res<IsoGrid>,
    mut camera: ResMut<Camera2DRes>,
) {
    if let Some(position) = query.iter().next() {
        camera.0.target = grid.world_to_iso(position.pos.x, position.pos.y);
    }
}
