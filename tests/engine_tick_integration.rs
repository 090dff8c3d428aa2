//! Engine tick integration tests for the player, camera and frame loop.
//!
//! Everything runs headless: the world is built with `setup_world`, input is
//! written straight into `InputState`, and the frame loop is driven with a
//! fixed delta instead of raylib's clock.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use isometria::components::facing::Facing;
use isometria::components::mapposition::MapPosition;
use isometria::components::player::{ActorState, Player};
use isometria::events::playerfell::PlayerFellEvent;
use isometria::events::switchdebug::SwitchDebugEvent;
use isometria::frameloop::{run_frames, simulation_schedule};
use isometria::game::setup_world;
use isometria::resources::camera2d::Camera2DRes;
use isometria::resources::debugmode::DebugMode;
use isometria::resources::gameconfig::GameConfig;
use isometria::resources::input::{Direction, InputState};
use isometria::resources::isogrid::IsoGrid;
use isometria::resources::worldtime::WorldTime;
use isometria::systems::player::player_controller;
use isometria::systems::time::update_world_time;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(speed: f32) -> (World, Entity) {
    let mut config = GameConfig::new();
    config.player_speed = speed;
    let mut world = World::new();
    let player = setup_world(&mut world, &config);
    (world, player)
}

fn press(world: &mut World, dir: Direction) {
    world.resource_mut::<InputState>().press(dir);
}

/// Run one tick with `dt`, then drop this tick's key edges.
fn tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
    world.resource_mut::<InputState>().clear_edges();
}

fn position(world: &World, player: Entity) -> Vector2 {
    world.get::<MapPosition>(player).unwrap().pos
}

#[test]
fn setup_spawns_idle_player_at_map_center() {
    let (world, player) = make_world(6.0);
    let pos = position(&world, player);
    assert!(approx_eq(pos.x, 10.0));
    assert!(approx_eq(pos.y, 10.0));
    let p = world.get::<Player>(player).unwrap();
    assert_eq!(p.state, ActorState::Idle);
    assert_eq!(p.facing, Facing::Down);
}

#[test]
fn pressing_up_for_one_second_walks_the_up_diagonal() {
    let (mut world, player) = make_world(0.1);
    let mut schedule = simulation_schedule();

    press(&mut world, Direction::Up);
    tick(&mut world, &mut schedule, 1.0);

    let pos = position(&world, player);
    assert!(approx_eq(pos.x, 10.0 - 0.0707107));
    assert!(approx_eq(pos.y, 10.0 - 0.0707107));
    let p = world.get::<Player>(player).unwrap();
    assert_eq!(p.facing, Facing::Up);
    assert_eq!(p.state, ActorState::Moving);
}

#[test]
fn two_orthogonal_keys_move_as_far_as_one() {
    let (mut single, single_player) = make_world(6.0);
    let (mut double, double_player) = make_world(6.0);
    let mut schedule_a = simulation_schedule();
    let mut schedule_b = simulation_schedule();

    press(&mut single, Direction::Up);
    tick(&mut single, &mut schedule_a, 0.1);

    press(&mut double, Direction::Up);
    press(&mut double, Direction::Right);
    tick(&mut double, &mut schedule_b, 0.1);

    let magnitude = |w: &World, e: Entity| {
        let p = position(w, e);
        (p.x - 10.0).hypot(p.y - 10.0)
    };
    assert!(approx_eq(magnitude(&single, single_player), 0.6));
    assert!(approx_eq(magnitude(&double, double_player), 0.6));
}

#[test]
fn idle_updates_leave_position_alone_and_rest_the_animation() {
    let (mut world, player) = make_world(6.0);
    let mut schedule = simulation_schedule();

    press(&mut world, Direction::Left);
    tick(&mut world, &mut schedule, 0.13);
    assert_eq!(world.get::<Player>(player).unwrap().frame_index(), 1);
    world.resource_mut::<InputState>().release(Direction::Left);

    let rest = position(&world, player);
    for _ in 0..5 {
        tick(&mut world, &mut schedule, 0.2);
        let p = world.get::<Player>(player).unwrap();
        assert_eq!(p.frame_index(), 0);
        assert_eq!(p.state, ActorState::Idle);
        assert_eq!(position(&world, player), rest);
    }
}

#[test]
fn holding_a_key_cycles_walk_frames_in_order() {
    let (mut world, player) = make_world(1.0);
    let mut schedule = simulation_schedule();

    press(&mut world, Direction::Down);
    let mut frames = Vec::new();
    // A frame only advances once its timer is strictly past 0.12s, so each
    // tick is a little longer than that.
    for _ in 0..4 {
        tick(&mut world, &mut schedule, 0.125);
        frames.push(world.get::<Player>(player).unwrap().frame_index());
    }
    assert_eq!(frames, vec![1, 2, 3, 0]);
}

#[test]
fn crossing_the_edge_starts_falling_without_clamping() {
    let (mut world, player) = make_world(6.0);
    world.get_mut::<MapPosition>(player).unwrap().pos = Vector2 { x: 19.95, y: 10.0 };
    let mut schedule = simulation_schedule();

    // Down + Right cancel on y and push straight along +x.
    press(&mut world, Direction::Down);
    press(&mut world, Direction::Right);
    tick(&mut world, &mut schedule, 0.05);

    let pos = position(&world, player);
    assert!(pos.x > 20.0);
    assert!(approx_eq(pos.y, 10.0));
    assert!(world.get::<Player>(player).unwrap().is_falling());
}

#[test]
fn falling_is_terminal_and_offset_never_decreases() {
    let (mut world, player) = make_world(6.0);
    world.get_mut::<MapPosition>(player).unwrap().pos = Vector2 { x: 0.1, y: 0.1 };
    let mut schedule = simulation_schedule();

    press(&mut world, Direction::Up);
    tick(&mut world, &mut schedule, 0.1);
    assert!(world.get::<Player>(player).unwrap().is_falling());
    let frozen = position(&world, player);

    let mut previous = 0.0;
    for dir in [Direction::Down, Direction::Right, Direction::Left, Direction::Down] {
        press(&mut world, dir);
        tick(&mut world, &mut schedule, 0.1);
        let p = world.get::<Player>(player).unwrap();
        assert!(p.is_falling());
        assert!(p.fall_offset() >= previous);
        previous = p.fall_offset();
    }
    assert!(approx_eq(previous, 4.0 * 0.1 * 200.0));
    assert_eq!(position(&world, player), frozen);
}

#[derive(Resource, Default)]
struct FallCount(u32);

fn count_falls(_trigger: On<PlayerFellEvent>, mut count: ResMut<FallCount>) {
    count.0 += 1;
}

#[test]
fn fall_event_fires_once() {
    let (mut world, player) = make_world(6.0);
    world.init_resource::<FallCount>();
    world.add_observer(count_falls);
    world.flush();
    world.get_mut::<MapPosition>(player).unwrap().pos = Vector2 { x: 0.1, y: 0.1 };
    let mut schedule = simulation_schedule();

    for _ in 0..5 {
        press(&mut world, Direction::Up);
        tick(&mut world, &mut schedule, 0.1);
    }
    assert_eq!(world.resource::<FallCount>().0, 1);
}

#[test]
fn switch_debug_event_toggles_debug_mode() {
    let (mut world, _player) = make_world(6.0);
    assert!(!world.contains_resource::<DebugMode>());

    world.trigger(SwitchDebugEvent {});
    world.flush();
    assert!(world.contains_resource::<DebugMode>());

    world.trigger(SwitchDebugEvent {});
    world.flush();
    assert!(!world.contains_resource::<DebugMode>());
}

#[test]
fn camera_tracks_player_iso_position() {
    let (mut world, player) = make_world(6.0);
    let mut schedule = simulation_schedule();

    press(&mut world, Direction::Right);
    tick(&mut world, &mut schedule, 0.25);

    let pos = position(&world, player);
    let grid = *world.resource::<IsoGrid>();
    let expected = grid.world_to_iso(pos.x, pos.y);
    let cam = world.resource::<Camera2DRes>();
    assert!(approx_eq(cam.0.target.x, expected.x));
    assert!(approx_eq(cam.0.target.y, expected.y));

    let on_screen = cam.screen_position(expected);
    assert!(approx_eq(on_screen.x, 480.0));
    assert!(approx_eq(on_screen.y, 320.0));
}

#[test]
fn run_frames_stops_on_predicate_and_counts_ticks() {
    let (mut world, player) = make_world(6.0);
    let mut schedule = simulation_schedule();
    press(&mut world, Direction::Left);

    let ticks = run_frames(
        &mut world,
        &mut schedule,
        |_| 1.0 / 60.0,
        |w| w.resource::<WorldTime>().frame_count >= 30,
    );

    assert_eq!(ticks, 30);
    let time = world.resource::<WorldTime>();
    assert!(approx_eq(time.elapsed, 0.5));
    // Half a second at 6 units/s along the left diagonal.
    let pos = position(&world, player);
    assert!(approx_eq(pos.x, 10.0 - 3.0 * std::f32::consts::FRAC_1_SQRT_2));
    assert!(approx_eq(pos.y, 10.0 + 3.0 * std::f32::consts::FRAC_1_SQRT_2));
}

#[test]
fn run_frames_with_immediate_quit_runs_nothing() {
    let (mut world, player) = make_world(6.0);
    let mut schedule = simulation_schedule();
    press(&mut world, Direction::Up);

    let ticks = run_frames(&mut world, &mut schedule, |_| 1.0, |_| true);

    assert_eq!(ticks, 0);
    assert_eq!(world.resource::<WorldTime>().frame_count, 0);
    assert_eq!(position(&world, player), Vector2 { x: 10.0, y: 10.0 });
}

#[test]
fn player_controller_alone_runs_without_camera() {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(IsoGrid::default());
    let player = world
        .spawn((Player::new(6.0, 200.0), MapPosition::new(5.0, 5.0)))
        .id();
    let mut schedule = Schedule::default();
    schedule.add_systems(player_controller);

    press(&mut world, Direction::Down);
    tick(&mut world, &mut schedule, 0.1);

    let pos = position(&world, player);
    assert!(pos.x > 5.0 && pos.y > 5.0);
}
