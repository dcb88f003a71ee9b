use crate::config::GameConfig;

/// Speed ramp: how the tick interval tightens as the score grows.
/// Lower interval means a faster snake.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SpeedRamp {
    pub initial_ms: u32,
    pub step_ms: u32,
    pub floor_ms: u32,
    pub every: u32,
}

impl SpeedRamp {
    pub const fn from_config(config: &GameConfig) -> Self {
        Self {
            initial_ms: config.initial_speed_ms,
            step_ms: config.speed_step_ms,
            floor_ms: config.speed_floor_ms,
            every: config.points_per_speedup,
        }
    }

    /// Interval to use after the score changed to `score`.
    /// Only positive multiples of `every` tighten it.
    pub fn after_score(&self, current_ms: u32, score: u32) -> u32 {
        if score > 0 && self.every > 0 && score % self.every == 0 {
            current_ms.saturating_sub(self.step_ms).max(self.floor_ms)
        } else {
            current_ms
        }
    }
}

impl Default for SpeedRamp {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
