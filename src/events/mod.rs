//! Event types and observers.
//!
//! Submodules:
//! - [`playerfell`] – the player left the map and started falling
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod playerfell;
pub mod switchdebug;
