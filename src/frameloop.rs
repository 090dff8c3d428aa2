//! Frame loop.
//!
//! [`run_frames`] is the whole game loop minus the window: the caller injects
//! where elapsed time comes from and when to stop. `main` plugs in raylib's
//! frame timer and window-close flag; tests plug in a fixed delta and a frame
//! budget.
use bevy_ecs::prelude::*;
use log::debug;

use crate::systems::camera::camera_follow;
use crate::systems::player::player_controller;
use crate::systems::time::update_world_time;

/// Schedule with the display-independent per-frame systems.
///
/// The player is updated before the camera follows it. `main` adds input
/// polling before [`player_controller`] and rendering after [`camera_follow`].
pub fn simulation_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((player_controller, camera_follow).chain());
    schedule
}

/// Run ticks until `should_quit` says so. Returns how many ticks ran.
///
/// Each tick: ask `should_quit`, read the frame delta from `frame_time`,
/// advance [`WorldTime`](crate::resources::worldtime::WorldTime), run the
/// schedule, clear change trackers.
pub fn run_frames<T, Q>(
    world: &mut World,
    schedule: &mut Schedule,
    mut frame_time: T,
    mut should_quit: Q,
) -> u64
where
    T: FnMut(&World) -> f32,
    Q: FnMut(&World) -> bool,
{
    let mut ticks = 0;
    while !should_quit(world) {
        let dt = frame_time(world);
        update_world_time(world, dt);

        schedule.run(world);

        world.clear_trackers();
        ticks += 1;
    }
    debug!("frame loop stopped after {} ticks", ticks);
    ticks
}
