use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the board in cells
    pub grid_width: usize,
    /// Height of the board in cells
    pub grid_height: usize,
    /// Length of the snake at the start of a session
    pub initial_snake_length: usize,

    // Tick speed: the interval shrinks linearly as food is eaten.
    /// Tick interval at score 0, in milliseconds
    pub base_tick_ms: u64,
    /// Milliseconds shaved off the interval per food eaten
    pub speedup_per_food_ms: u64,
    /// Shortest interval the game will ever tick at
    pub min_tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            initial_snake_length: 3,
            base_tick_ms: 200,
            speedup_per_food_ms: 10,
            min_tick_ms: 20,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom board size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Small board, handy in tests
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Tick interval for a given score: `base - speedup * score`, floored
    /// at `min_tick_ms` so the timer period never reaches zero.
    pub fn tick_interval(&self, score: u32) -> Duration {
        let shaved = self
            .base_tick_ms
            .saturating_sub(self.speedup_per_food_ms.saturating_mul(u64::from(score)));
        Duration::from_millis(shaved.max(self.min_tick_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.base_tick_ms, 200);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 12);
        assert_eq!(config.initial_snake_length, 3);
    }

    #[test]
    fn test_tick_interval_shrinks_with_score() {
        let config = GameConfig::default();
        assert_eq!(config.tick_interval(0), Duration::from_millis(200));
        assert_eq!(config.tick_interval(1), Duration::from_millis(190));
        assert_eq!(config.tick_interval(5), Duration::from_millis(150));
    }

    #[test]
    fn test_tick_interval_floor() {
        let config = GameConfig::default();
        // 200 - 10 * 18 = 20, exactly the floor
        assert_eq!(config.tick_interval(18), Duration::from_millis(20));
        // Past the floor the interval stops shrinking
        assert_eq!(config.tick_interval(19), Duration::from_millis(20));
        assert_eq!(config.tick_interval(10_000), Duration::from_millis(20));
    }
}
