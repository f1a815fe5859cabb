//! Movement domain: configuration errors raised when a controller is built.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("body extents must be positive, got {width}x{height}")]
    InvalidBody { width: f32, height: f32 },

    #[error("skin width {skin} must be in [0, {limit}) for this body")]
    SkinTooWide { skin: f32, limit: f32 },

    #[error("time to apex must be positive, got {0}")]
    InvalidApexTime(f32),

    #[error("jump heights must satisfy 0 <= min ({min}) <= max ({max}) and max > 0")]
    InvalidJumpHeights { min: f32, max: f32 },

    #[error("{name} must be non-negative, got {value}")]
    Negative { name: &'static str, value: f32 },
}
