//! Player controller system.
//!
//! Feeds [`InputState`] and [`WorldTime`] into [`Player::update`] for the
//! player entity and announces the moment it starts falling.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::mapposition::MapPosition;
use crate::components::player::{Player, Transition};
use crate::events::playerfell::PlayerFellEvent;
use crate::resources::input::InputState;
use crate::resources::isogrid::IsoGrid;
use crate::resources::worldtime::WorldTime;

pub fn player_controller(
    mut query: Query<(&mut Player, &mut MapPosition)>,
    input: Res<InputState>,
    time: Res<WorldTime>,
    grid: Res<IsoGrid>,
    mut commands: Commands,
) {
    for (mut player, mut position) in query.iter_mut() {
        match player.update(&mut position, time.delta, &input, &grid) {
            Transition::StartedFalling => {
                debug!("player state -> Falling");
                commands.trigger(PlayerFellEvent {
                    position: position.pos,
                });
            }
            Transition::Stood | Transition::Walked | Transition::KeptFalling => {}
        }
    }
}
