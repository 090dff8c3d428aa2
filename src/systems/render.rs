//! Render pass.
//!
//! Draw order: background, tile diamonds, player sprite, failure message,
//! debug overlay. Tiles and the player are drawn inside raylib's 2D mode with
//! [`Camera2DRes`], so they are placed in isometric pixel space and the
//! camera moves them to the screen. Tiles have no height and need no sorting.
use std::ffi::CString;

use bevy_ecs::prelude::*;
use raylib::ffi;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::isogrid::IsoGrid;
use crate::resources::screensize::ScreenSize;
use crate::resources::spritesheet::SpriteSheet;

const BACKGROUND_COLOR: Color = Color::new(20, 20, 25, 255);
const TILE_FILL_COLOR: Color = Color::new(70, 120, 70, 255);
const TILE_OUTLINE_COLOR: Color = Color::new(40, 80, 40, 255);
const FALL_MESSAGE: &str = "You fell!";
const FALL_MESSAGE_COLOR: Color = Color::new(255, 60, 60, 255);
const FALL_MESSAGE_FONT_SIZE: i32 = 72;
const FALL_MESSAGE_Y: i32 = 40;
/// Pixels the sprite must drop before the failure message shows up.
pub const FALL_MESSAGE_THRESHOLD: f32 = 150.0;

/// Top-left corner for the player's sprite frame.
///
/// The frame is centered horizontally on the tile and its bottom edge sits
/// on the tile's lower half, pushed down by `fall_offset` while falling.
pub fn sprite_anchor(iso: Vector2, frame_size: f32, tile_height: f32, fall_offset: f32) -> Vector2 {
    Vector2 {
        x: iso.x - frame_size / 2.0,
        y: iso.y - frame_size + tile_height / 2.0 + fall_offset,
    }
}

pub fn fall_message_visible(player: &Player) -> bool {
    player.is_falling() && player.fall_offset() > FALL_MESSAGE_THRESHOLD
}

/// X coordinate that centers a `text_width` wide string on the screen.
pub fn centered_text_x(screen_width: i32, text_width: i32) -> i32 {
    screen_width / 2 - text_width / 2
}

fn text_width(text: &str, font_size: i32) -> i32 {
    let Ok(c_text) = CString::new(text) else {
        return 0;
    };
    unsafe { ffi::MeasureText(c_text.as_ptr(), font_size) }
}

fn draw_tiles<D: RaylibDraw>(d: &mut D, grid: &IsoGrid) {
    for (x, y) in grid.cells() {
        let center = grid.world_to_iso(x as f32, y as f32);
        let [top, right, bottom, left] = grid.tile_diamond(center);

        // Counter-clockwise on screen, as raylib expects.
        d.draw_triangle(top, left, bottom, TILE_FILL_COLOR);
        d.draw_triangle(top, bottom, right, TILE_FILL_COLOR);

        d.draw_line_v(top, right, TILE_OUTLINE_COLOR);
        d.draw_line_v(right, bottom, TILE_OUTLINE_COLOR);
        d.draw_line_v(bottom, left, TILE_OUTLINE_COLOR);
        d.draw_line_v(left, top, TILE_OUTLINE_COLOR);
    }
}

/// Draw one frame and present it.
#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    sheet: NonSend<SpriteSheet>,
    camera: Res<Camera2DRes>,
    grid: Res<IsoGrid>,
    screen: Res<ScreenSize>,
    debug: Option<Res<DebugMode>>,
    query: Query<(&Player, &MapPosition)>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(BACKGROUND_COLOR);

    {
        let mut d2 = d.begin_mode2D(camera.0);
        draw_tiles(&mut d2, &grid);

        for (player, position) in query.iter() {
            let iso = grid.world_to_iso(position.pos.x, position.pos.y);
            let src = sheet.layout.frame_rect(player.facing, player.frame_index());
            let dest = sprite_anchor(
                iso,
                sheet.layout.frame_size,
                grid.tile_height,
                player.fall_offset(),
            );
            d2.draw_texture_rec(&sheet.texture, src, dest, Color::WHITE);
        }
    }

    if query.iter().any(|(player, _)| fall_message_visible(player)) {
        let width = text_width(FALL_MESSAGE, FALL_MESSAGE_FONT_SIZE);
        d.draw_text(
            FALL_MESSAGE,
            centered_text_x(screen.w, width),
            FALL_MESSAGE_Y,
            FALL_MESSAGE_FONT_SIZE,
            FALL_MESSAGE_COLOR,
        );
    }

    if debug.is_some() {
        render_debug_ui(&mut d, &camera, &grid, &screen, &query);
    }
}

fn render_debug_ui(
    d: &mut RaylibDrawHandle,
    camera: &Camera2DRes,
    grid: &IsoGrid,
    screen: &ScreenSize,
    query: &Query<(&Player, &MapPosition)>,
) {
    let fps = d.get_fps();
    let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps);
    d.draw_text(&text, 10, 10, 10, Color::RAYWHITE);

    for (player, position) in query.iter() {
        let iso = grid.world_to_iso(position.pos.x, position.pos.y);
        let on_screen = camera.screen_position(iso);
        let text = format!(
            "Grid: ({:.2}, {:.2}) Iso: ({:.1}, {:.1}) Screen: ({:.1}, {:.1})",
            position.pos.x, position.pos.y, iso.x, iso.y, on_screen.x, on_screen.y
        );
        d.draw_text(&text, 10, 30, 10, Color::RAYWHITE);
        let text = format!(
            "State: {:?} Facing: {:?} Frame: {}",
            player.state,
            player.facing,
            player.frame_index()
        );
        d.draw_text(&text, 10, 50, 10, Color::RAYWHITE);
    }

    let cam = camera.0;
    let cam_text = format!("Camera target: ({:.1}, {:.1})", cam.target.x, cam.target.y);
    d.draw_text(&cam_text, 10, screen.h - 30, 10, Color::RAYWHITE);
}
