//! World setup.
//!
//! Inserts the display-independent resources, registers observers and spawns
//! the player. `main` adds the raylib handles on top; tests use this as is.
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::events::playerfell::player_fell_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Populate `world` from `config` and return the player entity.
pub fn setup_world(world: &mut World, config: &GameConfig) -> Entity {
    let grid = config.iso_grid();
    let screen = config.screen_size();

    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(screen);
    world.insert_resource(grid);
    world.insert_resource(Camera2DRes::centered(screen));
    world.insert_resource(config.clone());

    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(player_fell_observer));

    let start = grid.center();
    let player = world
        .spawn((
            Player::new(config.player_speed, config.fall_speed),
            MapPosition::from_vec(start),
        ))
        .id();
    info!(
        "Spawned player at ({}, {}) on a {}x{} map",
        start.x, start.y, grid.width, grid.height
    );

    // Observers must be registered before any system triggers events.
    world.flush();
    player
}
