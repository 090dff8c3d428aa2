//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - Pressing the debug key triggers a [`SwitchDebugEvent`].
use bevy_ecs::prelude::*;
use log::trace;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{Direction, InputState};

/// Poll raylib for keyboard input and update the `InputState` resource.
///
/// Held state comes from `is_key_down`; the ordered key-down edges come from
/// raylib's key queue so the last key pressed this frame can be told apart
/// when several arrive at once.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    input.clear_edges();

    for dir in Direction::ALL {
        let key = input.direction(dir).key_binding;
        let active = rl.is_key_down(key);
        input.direction_mut(dir).active = active;
    }

    while let Some(key) = rl.get_key_pressed() {
        if let Some(dir) = input.direction_for_key(key) {
            trace!("key down: {:?}", dir);
            input.pressed_this_frame.push(dir);
        }
    }

    let debug_key = input.mode_debug.key_binding;
    input.mode_debug.active = rl.is_key_down(debug_key);
    if rl.is_key_pressed(debug_key) {
        commands.trigger(SwitchDebugEvent {});
    }
}
