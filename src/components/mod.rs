//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – walk cycle playback state owned by the player
//! - [`facing`] – which sprite sheet row the player looks along
//! - [`mapposition`] – grid-space position of an entity
//! - [`player`] – the player actor and its Idle/Moving/Falling state machine

pub mod animation;
pub mod facing;
pub mod mapposition;
pub mod player;
