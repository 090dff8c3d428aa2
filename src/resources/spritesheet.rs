//! Player sprite sheet.
//!
//! The sheet is a grid of square frames: one row per [`Facing`], one column
//! per walk frame. [`SheetLayout`] holds the slicing math and is independent of
//! raylib textures; [`SpriteSheet`] pairs it with the loaded texture.
//!
//! Note: [`SpriteSheet`] is a non-send resource because raylib textures must
//! be accessed from the main thread only.

use log::info;
use raylib::prelude::*;
use std::path::Path;

use crate::components::animation::WALK_FRAME_COUNT;
use crate::components::facing::Facing;

/// Frame grid of a sprite sheet image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetLayout {
    pub frame_size: f32,
    pub rows: u32,
    pub columns: u32,
}

impl SheetLayout {
    /// Slice an image of `width × height` pixels into `frame_size` squares.
    ///
    /// Fails if the image cannot hold a full walk cycle for every facing.
    pub fn from_texture_size(width: i32, height: i32, frame_size: u32) -> Result<Self, String> {
        if frame_size == 0 {
            return Err("sprite frame size must be non-zero".to_string());
        }
        let columns = width.max(0) as u32 / frame_size;
        let rows = height.max(0) as u32 / frame_size;
        if rows < Facing::COUNT || columns < WALK_FRAME_COUNT as u32 {
            return Err(format!(
                "sprite sheet {}x{} holds {}x{} frames of {}px, need at least {}x{}",
                width, height, columns, rows, frame_size, WALK_FRAME_COUNT, Facing::COUNT
            ));
        }
        Ok(Self {
            frame_size: frame_size as f32,
            rows,
            columns,
        })
    }

    /// Source rectangle of `frames[facing][frame_index]`.
    pub fn frame_rect(&self, facing: Facing, frame_index: usize) -> Rectangle {
        Rectangle {
            x: frame_index as f32 * self.frame_size,
            y: facing.row() as f32 * self.frame_size,
            width: self.frame_size,
            height: self.frame_size,
        }
    }
}

/// Loaded sprite sheet texture with its frame layout.
pub struct SpriteSheet {
    pub texture: Texture2D,
    pub layout: SheetLayout,
}

impl SpriteSheet {
    /// Load the sheet from disk and validate its frame grid.
    pub fn load(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        path: &Path,
        frame_size: u32,
    ) -> Result<Self, String> {
        let path_str = path
            .to_str()
            .ok_or_else(|| format!("sprite path {:?} is not valid UTF-8", path))?;
        let texture = rl
            .load_texture(thread, path_str)
            .map_err(|e| format!("Failed to load sprite sheet {}: {}", path.display(), e))?;
        let layout = SheetLayout::from_texture_size(texture.width, texture.height, frame_size)?;
        info!(
            "Loaded sprite sheet {} ({} rows x {} columns of {}px)",
            path.display(),
            layout.rows,
            layout.columns,
            frame_size
        );
        Ok(Self { texture, layout })
    }
}
