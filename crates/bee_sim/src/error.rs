//! Simulation-level errors

use crate::config::ConfigError;
use thiserror::Error;

/// Simulation-level errors
///
/// The simulation has no runtime failure modes; errors arise only when a
/// session or body is constructed from invalid parameters, or when a
/// configuration file cannot be loaded.
#[derive(Error, Debug)]
pub enum SimError {
    /// Projectile radius must be strictly positive
    #[error("invalid projectile size {0}: must be strictly positive")]
    InvalidProjectileSize(f32),

    /// Target box extents must be strictly positive on every axis
    #[error("invalid target size ({0}, {1}, {2}): every axis must be strictly positive")]
    InvalidTargetSize(f32, f32, f32),

    /// Default heading must be a non-zero vector
    #[error("default heading is the zero vector; a resting projectile needs a facing direction")]
    ZeroDefaultHeading,

    /// Configuration error propagated from loading or saving
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
