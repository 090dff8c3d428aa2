//! Game systems.
//!
//! Submodules overview
//! - [`camera`] – point the camera at the player
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`player`] – run the player state machine for the frame
//! - [`render`] – draw the grid, the player and overlays using raylib
//! - [`time`] – update simulation time and delta

pub mod camera;
pub mod input;
pub mod player;
pub mod render;
pub mod time;
