//! Game parameters and the validation policy applied to them

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Inclusive limits on board size and win count.
///
/// The effective upper limit on the win count is also capped by the board
/// size, so a validated game is always winnable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_size: usize,
    pub max_size: usize,
    pub min_win_count: usize,
    pub max_win_count: usize,
}

impl Bounds {
    pub const STRICT: Bounds = Bounds {
        min_size: 5,
        max_size: 19,
        min_win_count: 3,
        max_win_count: 10,
    };

    pub const RELAXED: Bounds = Bounds {
        min_size: 3,
        max_size: 1000,
        min_win_count: 3,
        max_win_count: 100,
    };

    pub fn check(&self, size: usize, win_count: usize) -> Result<(), ConfigError> {
        if size < self.min_size || size > self.max_size {
            return Err(ConfigError::InvalidSize {
                size,
                min: self.min_size,
                max: self.max_size,
            });
        }
        let max = self.max_win_count.min(size);
        if win_count < self.min_win_count || win_count > max {
            return Err(ConfigError::InvalidWinCount {
                win_count,
                min: self.min_win_count,
                max,
            });
        }
        Ok(())
    }
}

/// Largest side length whose cell count a `Vec` can hold (at most `isize::MAX`)
pub const MAX_BOARD_SIZE: usize = (1 << (usize::BITS / 2 - 1)) - 1;

/// How `size` and `win_count` are checked when a game is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// Size 5..=19, win count 3..=min(10, size)
    #[default]
    Strict,
    /// Size 3..=1000, win count 3..=min(100, size)
    Relaxed,
    /// Any win count; size only has to describe a board that can exist
    /// (1..=[`MAX_BOARD_SIZE`])
    Unchecked,
    Custom(Bounds),
}

impl ValidationPolicy {
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            ValidationPolicy::Strict => Some(Bounds::STRICT),
            ValidationPolicy::Relaxed => Some(Bounds::RELAXED),
            ValidationPolicy::Unchecked => None,
            ValidationPolicy::Custom(bounds) => Some(*bounds),
        }
    }

    pub fn validate(&self, size: usize, win_count: usize) -> Result<(), ConfigError> {
        match self.bounds() {
            Some(bounds) => bounds.check(size, win_count),
            None if size == 0 || size > MAX_BOARD_SIZE => Err(ConfigError::InvalidSize {
                size,
                min: 1,
                max: MAX_BOARD_SIZE,
            }),
            None => Ok(()),
        }
    }
}

/// Parameters for a new game, loadable from TOML
///
/// ```toml
/// size = 15
/// win_count = 5
/// policy = "strict"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: usize,
    pub win_count: usize,
    pub policy: ValidationPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            size: 15,
            win_count: 5,
            policy: ValidationPolicy::Strict,
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.policy.validate(self.size, self.win_count)
    }
}
