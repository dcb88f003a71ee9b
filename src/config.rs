//! Game tunables.
//!
//! Everything the game would otherwise hard-code lives here so tests can
//! build small boards and the entry point can size the window from one place.

use anyhow::{ensure, Result};

/// Tunable parameters for one game session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Edge length of one board cell in pixels
    pub cell_size: u32,
    /// Minimum board cells per axis, regardless of canvas size
    pub min_board_cells: u32,
    /// Tick interval at the start of a session (ms)
    pub initial_speed_ms: u32,
    /// How much the interval shrinks on each speed-up (ms)
    pub speed_step_ms: u32,
    /// The interval never drops below this (ms)
    pub speed_floor_ms: u32,
    /// Score multiple that triggers a speed-up
    pub points_per_speedup: u32,
    pub window_width: u32,
    pub window_height: u32,
}

impl GameConfig {
    pub const TITLE: &'static str = "Snake Game";

    /// Check that the values describe a playable game
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell size must be positive");
        ensure!(self.min_board_cells > 0, "minimum board size must be positive");
        ensure!(self.points_per_speedup > 0, "points per speed-up must be positive");
        ensure!(
            self.speed_floor_ms <= self.initial_speed_ms,
            "speed floor ({}ms) is above the initial speed ({}ms)",
            self.speed_floor_ms,
            self.initial_speed_ms
        );
        ensure!(self.speed_floor_ms > 0, "speed floor must be positive");
        ensure!(
            self.window_width >= self.cell_size && self.window_height >= self.cell_size,
            "window {}x{} cannot hold a single {}px cell",
            self.window_width,
            self.window_height,
            self.cell_size
        );
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 20,
            min_board_cells: 10,
            initial_speed_ms: 150,
            speed_step_ms: 2,
            speed_floor_ms: 50,
            points_per_speedup: 10,
            window_width: 500,
            window_height: 500,
        }
    }
}
