//! Game configuration

use crate::error::ConfigurationError;

/// Default number of attempts per game
pub const NUM_ROWS: usize = 6;

/// Settings fixed for the lifetime of an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Attempts per game
    pub rows: usize,
    /// Seed for secret selection; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: NUM_ROWS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Default configuration with a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Check the settings can drive a game
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidRows`] if `rows` is zero.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.rows == 0 {
            return Err(ConfigurationError::InvalidRows { rows: self.rows });
        }
        Ok(())
    }
}
