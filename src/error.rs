/// Errors raised while setting up a game.
///
/// Construction is atomic: when one of these is returned no game exists.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("board size {size} is outside {min}..={max}")]
    InvalidSize { size: usize, min: usize, max: usize },

    #[error("win count {win_count} is outside {min}..={max}")]
    InvalidWinCount {
        win_count: usize,
        min: usize,
        max: usize,
    },

    #[error("failed to parse game config: {0}")]
    Parse(#[from] toml::de::Error),
}
