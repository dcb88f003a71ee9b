// Palette and text for the board
use macroquad::prelude::{Color, WHITE, GREEN, RED, DARKGRAY};

pub const BACKGROUND: Color = WHITE;
pub const SNAKE_COLOR: Color = GREEN;
pub const FOOD_COLOR: Color = RED;
pub const STATUS_COLOR: Color = DARKGRAY;
pub const GAME_OVER_COLOR: Color = RED;

pub const STATUS_FONT_SIZE: u16 = 16;
pub const MESSAGE_FONT_SIZE: u16 = 20;

/// Shown over the board once the snake bites itself
pub const GAME_OVER_LINES: &[&str] = &[
    "Game Over!",
    "Press [ESC] to restart.",
    "Press [P] to pause.",
    "Press [Q] to quit.",
];
