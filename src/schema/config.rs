//! Configuration types for a Life board and its drivers.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_cell_size() -> u32 {
    10
}

fn default_interval_ms() -> u64 {
    1000
}

/// Top-level board configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows (Y dimension).
    pub rows: usize,
    /// Number of columns (X dimension).
    pub cols: usize,
    /// Size of one cell in pixels, used to map pointer positions to cells.
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,
    /// Milliseconds between generations while running.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for BoardConfig {
    /// A 1000x750 pixel board of 10 pixel cells, one generation per second.
    fn default() -> Self {
        Self {
            rows: 75,
            cols: 100,
            cell_size: default_cell_size(),
            interval_ms: default_interval_ms(),
        }
    }
}

impl BoardConfig {
    /// Get total number of cells (rows * cols).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Board size in pixels as `(width, height)`.
    pub fn board_pixels(&self) -> (u64, u64) {
        let cell = u64::from(self.cell_size);
        (self.cols as u64 * cell, self.rows as u64 * cell)
    }

    /// Interval between generations.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.cell_size == 0 {
            return Err(ConfigError::InvalidCellSize);
        }
        if self.interval_ms == 0 {
            return Err(ConfigError::InvalidInterval);
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Board dimensions must be non-zero (got {rows} rows x {cols} cols)")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("Cell size must be non-zero")]
    InvalidCellSize,
    #[error("Update interval must be non-zero")]
    InvalidInterval,
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
