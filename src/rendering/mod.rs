use macroquad::prelude::*;
use crate::application::GameState;
use crate::domain::Point;
use crate::ui::{
    BACKGROUND, FOOD_COLOR, GAME_OVER_COLOR, GAME_OVER_LINES, MESSAGE_FONT_SIZE, SNAKE_COLOR,
    STATUS_COLOR, STATUS_FONT_SIZE,
};

/// Top-left pixel of a board cell
fn cell_origin(p: Point, cell_size: f32) -> (f32, f32) {
    (p.x as f32 * cell_size, p.y as f32 * cell_size)
}

/// Draw one full frame of the game
pub fn draw_board(state: &GameState) {
    let cell_size = state.config.cell_size as f32;

    clear_background(BACKGROUND);

    for segment in state.snake.cells() {
        let (x, y) = cell_origin(segment, cell_size);
        draw_rectangle(x, y, cell_size, cell_size, SNAKE_COLOR);
    }

    if let Some(food) = state.food {
        let (x, y) = cell_origin(food, cell_size);
        let radius = cell_size / 2.0;
        draw_circle(x + radius, y + radius, radius, FOOD_COLOR);
    }

    draw_status(&state.status_title());

    if state.game_over {
        draw_game_over(screen_width(), screen_height());
    }
}

/// Status readout in the top-left corner
fn draw_status(title: &str) {
    let size = measure_text(title, None, STATUS_FONT_SIZE, 1.0);
    draw_text(title, 4.0, 4.0 + size.offset_y, STATUS_FONT_SIZE as f32, STATUS_COLOR);
}

/// Multi-line message, block centred on the widest line, starting at mid-height
fn draw_game_over(width: f32, height: f32) {
    let dims: Vec<TextDimensions> = GAME_OVER_LINES
        .iter()
        .map(|line| measure_text(line, None, MESSAGE_FONT_SIZE, 1.0))
        .collect();
    let block_width = dims.iter().map(|d| d.width).fold(0.0, f32::max);
    let line_height = MESSAGE_FONT_SIZE as f32 * 1.2;
    let x = (width - block_width) / 2.0;

    for (i, (line, d)) in GAME_OVER_LINES.iter().zip(&dims).enumerate() {
        let y = height / 2.0 + i as f32 * line_height + d.offset_y;
        draw_text(line, x, y, MESSAGE_FONT_SIZE as f32, GAME_OVER_COLOR);
    }
}
