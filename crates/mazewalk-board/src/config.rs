use crate::error::{BoardError, MAX_DIMENSION};

/// Board construction and timing parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    /// Coarse maze width; the walkable grid is twice as wide.
    pub width: i32,
    /// Coarse maze height; the walkable grid is twice as tall.
    pub height: i32,
    /// Seconds between two search or replay steps.
    pub step_interval: f32,
    /// Player speed in world units per second.
    pub player_speed: f32,
    /// World length of one fine cell.
    pub unit_length: f32,
    /// Grow-back rate of a shrunk cell, per second.
    pub scale_rate: f32,
    /// Replay the path as soon as a search finds the end.
    pub auto_trace: bool,
    /// Maze seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            step_interval: 0.04,
            player_speed: 20.0,
            unit_length: 2.0,
            scale_rate: 1.0,
            auto_trace: true,
            seed: None,
        }
    }
}

impl BoardConfig {
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the maze dimensions.
    pub fn validate(&self) -> Result<(), BoardError> {
        let (width, height) = (self.width, self.height);
        if width <= 0 || height <= 0 {
            return Err(BoardError::ZeroSize { width, height });
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(BoardError::TooLarge { width, height });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_board_timing() {
        let c = BoardConfig::default();
        assert_eq!((c.width, c.height), (10, 10));
        assert_eq!(c.step_interval, 0.04);
        assert_eq!(c.player_speed, 20.0);
        assert!(c.auto_trace);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_sizes() {
        let c = BoardConfig::default().with_size(0, 3);
        assert_eq!(
            c.validate(),
            Err(BoardError::ZeroSize {
                width: 0,
                height: 3
            })
        );
        let c = BoardConfig::default().with_size(3, MAX_DIMENSION + 1);
        assert!(matches!(c.validate(), Err(BoardError::TooLarge { .. })));
    }
}
