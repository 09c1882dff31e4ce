//! Editor configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_MAX_PLACEMENT_ATTEMPTS};
use crate::geom::Size;

pub const CANVAS_WIDTH_VAR: &str = "PLANIT_CANVAS_WIDTH";
pub const CANVAS_HEIGHT_VAR: &str = "PLANIT_CANVAS_HEIGHT";
pub const MAX_PLACEMENT_ATTEMPTS_VAR: &str = "PLANIT_MAX_PLACEMENT_ATTEMPTS";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got '{value}'")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    /// Initial canvas size.
    pub canvas: Size,
    /// Cap on candidates examined when placing a new room.
    pub max_placement_attempts: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas: Size::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT),
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl EditorConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PLANIT_CANVAS_WIDTH`: default 800
    /// - `PLANIT_CANVAS_HEIGHT`: default 600
    /// - `PLANIT_MAX_PLACEMENT_ATTEMPTS`: default 1000
    ///
    /// # Errors
    ///
    /// Returns `Invalid` when a variable is set but is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let width = env_positive(CANVAS_WIDTH_VAR, DEFAULT_CANVAS_WIDTH)?;
        let height = env_positive(CANVAS_HEIGHT_VAR, DEFAULT_CANVAS_HEIGHT)?;
        let attempts = env_positive(MAX_PLACEMENT_ATTEMPTS_VAR, DEFAULT_MAX_PLACEMENT_ATTEMPTS)?;
        Ok(Self { canvas: Size::new(width, height), max_placement_attempts: attempts })
    }
}

fn env_positive<T>(var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match std::env::var(var) {
        Ok(raw) => parse_positive(var, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_positive<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match raw.trim().parse::<T>() {
        Ok(v) if v > T::default() => Ok(v),
        _ => Err(ConfigError::Invalid { var, value: raw.to_string() }),
    }
}
