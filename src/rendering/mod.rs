use macroquad::prelude::*;

use crate::domain::{Position, Snapshot};

/// Draw one frame from a snapshot: background fill, score HUD, one
/// block-sized rectangle per snake segment, one for the food. Pure read;
/// nothing here touches simulation state.
pub fn draw_frame(snapshot: &Snapshot, block_size: f32) {
    clear_background(Color::from_rgba(26, 128, 182, 255));

    // HUD text scales with the screen height.
    draw_text(
        &format!("Score: {}", snapshot.score),
        20.0,
        screen_height() / 10.0,
        screen_height() / 15.0,
        WHITE,
    );

    for &segment in &snapshot.segments {
        draw_block(segment, block_size, WHITE);
    }
    draw_block(snapshot.food, block_size, RED);
}

/// Dim the playfield and announce the paused state on top of it.
pub fn draw_paused_overlay() {
    draw_rectangle(
        0.0,
        0.0,
        screen_width(),
        screen_height(),
        Color::from_rgba(0, 0, 0, 140),
    );
    let text = "Paused";
    let font_size = screen_height() / 12.0;
    let measured = measure_text(text, None, font_size as u16, 1.0);
    draw_text(
        text,
        (screen_width() - measured.width) / 2.0,
        screen_height() / 2.0,
        font_size,
        WHITE,
    );
}

fn draw_block(pos: Position, block_size: f32, color: Color) {
    draw_rectangle(
        pos.x as f32 * block_size,
        pos.y as f32 * block_size,
        block_size,
        block_size,
        color,
    );
}
