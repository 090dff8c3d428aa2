//! Isometria main entry point.
//!
//! A tiny isometric walking demo written in Rust using:
//! - **raylib** for windowing, input, drawing and frame pacing
//! - **bevy_ecs** for the world, systems and observers
//!
//! Walk with WASD. Step off the edge of the map and you fall for good.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults if missing, fatal if malformed), open the window, load the sprite sheet
//! 2. Build the ECS world, spawn the player, register observers
//! 3. Each frame: poll input, update the player, follow with the camera, draw
//! 4. Stop when the window is closed (or after `--max-frames`)
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use isometria::frameloop::{run_frames, simulation_schedule};
use isometria::game::setup_world;
use isometria::resources::debugmode::DebugMode;
use isometria::resources::gameconfig::GameConfig;
use isometria::resources::spritesheet::SpriteSheet;
use isometria::resources::worldtime::WorldTime;
use isometria::systems::camera::camera_follow;
use isometria::systems::input::update_input_state;
use isometria::systems::player::player_controller;
use isometria::systems::render::render_system;

/// Isometria: walk the isometric grid, try not to fall off.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Start with the debug overlay enabled (toggle with F11).
    #[arg(long)]
    debug: bool,

    /// Quit after this many frames.
    #[arg(long, value_name = "N")]
    max_frames: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if config.config_path.exists() {
        if let Err(e) = config.load_from_file() {
            error!("Invalid configuration {:?}: {}", config.config_path, e);
            std::process::exit(1);
        }
    } else {
        warn!(
            "Config file {:?} not found; using default configuration",
            config.config_path
        );
    }
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    // --------------- Raylib window & assets ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("Isometria")
        .build();
    rl.set_target_fps(config.target_fps);
    // Only closing the window quits
    rl.set_exit_key(None);

    let sheet = match SpriteSheet::load(&mut rl, &thread, &config.sprite_path, config.frame_size) {
        Ok(sheet) => sheet,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    setup_world(&mut world, &config);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }
    world.insert_non_send_resource(sheet);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut update = simulation_schedule();
    update.add_systems(update_input_state.before(player_controller));
    update.add_systems(render_system.after(camera_follow));

    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    let max_frames = cli.max_frames;
    let ticks = run_frames(
        &mut world,
        &mut update,
        |world| {
            world
                .non_send_resource::<raylib::RaylibHandle>()
                .get_frame_time()
        },
        |world| {
            world
                .non_send_resource::<raylib::RaylibHandle>()
                .window_should_close()
                || max_frames.is_some_and(|n| world.resource::<WorldTime>().frame_count >= n)
        },
    );
    info!("Bye after {} frames", ticks);
}
