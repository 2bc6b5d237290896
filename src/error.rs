//! Error types
//!
//! Configuration is validated once, at construction. Nothing after that fails.

use thiserror::Error;

/// A rejected configuration value.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("speed must be positive and finite, got {0}")]
    NonPositiveSpeed(f32),
    #[error("retimer period must be positive and finite, got {0}")]
    NonPositiveRetimerPeriod(f32),
    #[error("hide duration must be finite and not negative, got {0}")]
    NegativeHideDuration(f32),
    #[error("edge buffer must be finite and not negative, got {0}")]
    NegativeEdgeBuffer(f32),
    #[error("edge margin must be finite and not negative, got {0}")]
    NegativeMargin(f32),
    #[error("edge buffer {edge_buffer} must be smaller than half the bounds extent {half_extent}")]
    EdgeBufferTooWide { edge_buffer: f32, half_extent: f32 },
    #[error("bounds must have positive finite area, got {width} x {height}")]
    DegenerateBounds { width: f32, height: f32 },
    #[error("viewport must have positive finite pixel and world extents")]
    DegenerateViewport,
}

/// Top-level error for building a simulation from settings.
#[derive(Debug, Error)]
pub enum WanderError {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reject anything that is not strictly positive and finite.
pub(crate) fn require_positive(value: f32, err: fn(f32) -> ConfigError) -> Result<f32, ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(err(value))
    }
}

/// Reject anything negative or non-finite.
pub(crate) fn require_non_negative(
    value: f32,
    err: fn(f32) -> ConfigError,
) -> Result<f32, ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(err(value))
    }
}
