//! Isometria library.
//!
//! A single sprite walking on an isometric grid until it steps off the edge.
//! The ECS components, resources, systems and events live here so the game
//! loop can be driven headless from integration tests.

pub mod components;
pub mod events;
pub mod frameloop;
pub mod game;
pub mod iso;
pub mod resources;
pub mod systems;
