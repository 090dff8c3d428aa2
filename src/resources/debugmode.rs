//! Debug toggle resource.
//!
//! The mere presence of this resource enables the debug overlay drawn by the
//! render pass. Remove it to hide the overlay.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render pass draws diagnostics.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
