//! Notification emitted when the player walks off the map.
//!
//! [`crate::systems::player::player_controller`] triggers a
//! [`PlayerFellEvent`] on the frame the player enters the falling state.
//! The event fires once per run since falling is terminal.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::Vector2;

use crate::resources::worldtime::WorldTime;

#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerFellEvent {
    /// Grid position where the player left the map.
    pub position: Vector2,
}

pub fn player_fell_observer(trigger: On<PlayerFellEvent>, time: Res<WorldTime>) {
    let event = trigger.event();
    info!(
        "Player fell off the map at ({:.2}, {:.2}) after {:.2}s",
        event.position.x, event.position.y, time.elapsed
    );
}
