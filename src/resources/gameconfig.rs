//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup so a missing file still yields a playable game.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 960
//! height = 640
//! target_fps = 60
//!
//! [map]
//! width = 20
//! height = 20
//! tile_width = 64
//! tile_height = 32
//!
//! [player]
//! speed = 6.0
//! fall_speed = 200.0
//!
//! [sprite]
//! path = ./assets/player.png
//! frame_size = 64
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::resources::isogrid::IsoGrid;
use crate::resources::screensize::ScreenSize;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 960;
const DEFAULT_WINDOW_HEIGHT: u32 = 640;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_MAP_WIDTH: u32 = 20;
const DEFAULT_MAP_HEIGHT: u32 = 20;
const DEFAULT_TILE_WIDTH: u32 = 64;
const DEFAULT_TILE_HEIGHT: u32 = 32;
/// Grid units per second (0.1 per frame at 60 FPS).
const DEFAULT_PLAYER_SPEED: f32 = 6.0;
/// Pixels per second.
const DEFAULT_FALL_SPEED: f32 = 200.0;
const DEFAULT_SPRITE_PATH: &str = "./assets/player.png";
const DEFAULT_FRAME_SIZE: u32 = 64;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Map width in grid cells.
    pub map_width: u32,
    /// Map height in grid cells.
    pub map_height: u32,
    /// Tile diamond width in pixels.
    pub tile_width: u32,
    /// Tile diamond height in pixels.
    pub tile_height: u32,
    /// Player walking speed in grid units per second.
    pub player_speed: f32,
    /// Sprite drop speed in pixels per second once off the map.
    pub fall_speed: f32,
    /// Sprite sheet image.
    pub sprite_path: PathBuf,
    /// Side of one square sprite frame in pixels.
    pub frame_size: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
            player_speed: DEFAULT_PLAYER_SPEED,
            fall_speed: DEFAULT_FALL_SPEED,
            sprite_path: PathBuf::from(DEFAULT_SPRITE_PATH),
            frame_size: DEFAULT_FRAME_SIZE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Returns an error
    /// if the file cannot be read or parsed, or if a present value is
    /// malformed or out of range.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = read_u32(&config, "window", "width")? {
            self.window_width = width;
        }
        if let Some(height) = read_u32(&config, "window", "height")? {
            self.window_height = height;
        }
        if let Some(fps) = read_u32(&config, "window", "target_fps")? {
            self.target_fps = fps;
        }

        // [map] section
        if let Some(width) = read_u32(&config, "map", "width")? {
            self.map_width = width;
        }
        if let Some(height) = read_u32(&config, "map", "height")? {
            self.map_height = height;
        }
        if let Some(width) = read_u32(&config, "map", "tile_width")? {
            self.tile_width = width;
        }
        if let Some(height) = read_u32(&config, "map", "tile_height")? {
            self.tile_height = height;
        }

        // [player] section
        if let Some(speed) = read_f32(&config, "player", "speed")? {
            self.player_speed = speed;
        }
        if let Some(speed) = read_f32(&config, "player", "fall_speed")? {
            self.fall_speed = speed;
        }

        // [sprite] section
        if let Some(path) = config.get("sprite", "path") {
            self.sprite_path = PathBuf::from(path);
        }
        if let Some(size) = read_u32(&config, "sprite", "frame_size")? {
            self.frame_size = size;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, map {}x{}, tiles {}x{}, speed={}, sprite={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.map_width,
            self.map_height,
            self.tile_width,
            self.tile_height,
            self.player_speed,
            self.sprite_path
        );

        Ok(())
    }

    /// Reject values the game cannot start with.
    pub fn validate(&self) -> Result<(), String> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err("window size must be non-zero".to_string());
        }
        if self.target_fps == 0 {
            return Err("target_fps must be non-zero".to_string());
        }
        if self.map_width == 0 || self.map_height == 0 {
            return Err("map size must be non-zero".to_string());
        }
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err("tile size must be non-zero".to_string());
        }
        if self.frame_size == 0 {
            return Err("sprite frame_size must be non-zero".to_string());
        }
        if !(self.player_speed.is_finite() && self.player_speed >= 0.0) {
            return Err(format!("invalid player speed {}", self.player_speed));
        }
        if !(self.fall_speed.is_finite() && self.fall_speed >= 0.0) {
            return Err(format!("invalid fall speed {}", self.fall_speed));
        }
        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    pub fn screen_size(&self) -> ScreenSize {
        ScreenSize {
            w: self.window_width as i32,
            h: self.window_height as i32,
        }
    }

    pub fn iso_grid(&self) -> IsoGrid {
        IsoGrid::new(
            self.map_width,
            self.map_height,
            self.tile_width as f32,
            self.tile_height as f32,
        )
    }
}

/// Read an unsigned key. Absent is `Ok(None)`; unparsable or wider than `u32` is an error.
fn read_u32(config: &Ini, section: &str, key: &str) -> Result<Option<u32>, String> {
    match config.getuint(section, key) {
        Ok(Some(value)) => u32::try_from(value)
            .map(Some)
            .map_err(|_| format!("[{}] {} = {} is out of range", section, key, value)),
        Ok(None) => Ok(None),
        Err(e) => Err(format!("[{}] {}: {}", section, key, e)),
    }
}

/// Read a float key. Absent is `Ok(None)`; unparsable is an error.
fn read_f32(config: &Ini, section: &str, key: &str) -> Result<Option<f32>, String> {
    match config.getfloat(section, key) {
        Ok(value) => Ok(value.map(|v| v as f32)),
        Err(e) => Err(format!("[{}] {}: {}", section, key, e)),
    }
}
