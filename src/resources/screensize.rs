//! Screen size resource.
//!
//! Stores the fixed logical display size in pixels. The render pass reads it
//! to center the camera and the failure message.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
