//! ECS resources made available to systems.
//!
//! Overview
//! - `camera2d` – shared 2D camera following the player
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – settings loaded from `config.ini`
//! - `input` – per-frame keyboard state of the keys the game uses
//! - `isogrid` – map size and tile size; owns the iso projection helpers
//! - `screensize` – logical display size in pixels
//! - `spritesheet` – player sprite sheet texture and frame layout (non-send)
//! - `worldtime` – simulation time and delta
pub mod camera2d;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod isogrid;
pub mod screensize;
pub mod spritesheet;
pub mod worldtime;
