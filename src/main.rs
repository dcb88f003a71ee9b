use std::time::Duration;

use macroquad::prelude::*;
use snake_game::{CanvasSize, Effect, GameBoard, GameConfig, Message, input, rendering};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    let config = GameConfig::default();
    Conf {
        window_title: GameConfig::TITLE.to_owned(),
        window_width: config.window_width as i32,
        window_height: config.window_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = GameConfig::default();
    if let Err(err) = config.validate() {
        error!("invalid game configuration: {err:#}");
        return;
    }

    let mut board = GameBoard::new(config);
    let mut last_title = String::new();

    'game: loop {
        // The paint sizes the board lazily, so it goes before keys and timer
        let canvas = CanvasSize::new(screen_width(), screen_height());
        board.dispatch(Message::PaintRequest(canvas));

        for key in input::pressed_keys() {
            if board.dispatch(Message::KeyPress(key)) == Effect::Quit {
                break 'game;
            }
        }

        board.update(Duration::from_secs_f32(get_frame_time()));

        let title = board.state().status_title();
        if title != last_title {
            debug!(%title, "status");
            last_title = title;
        }

        rendering::draw_board(board.state());

        next_frame().await;
    }

    board.dispose();
    info!(score = board.state().score, "window closed");
}
