//! Configuration system
//!
//! Tuning values for the simulation, serializable to TOML or RON. The
//! defaults describe the built-in scene: gravity of (0, -10, 0), an aim
//! vector of 10x the drag in normalized device coordinates, a launch
//! multiplier of 3, and three target boxes hanging at the far end of the
//! range.
//!
//! Vector-valued settings are stored as `[x, y, z]` arrays so the config
//! files stay hand-editable.

use crate::error::SimError;
use serde::{Deserialize, Serialize};

/// Configuration trait
///
/// Blanket file I/O for any serde-serializable config type. The format is
/// chosen by file extension.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Complete simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Constant gravitational acceleration applied while flying
    pub gravity: [f32; 3],

    /// Aim vector per unit of drag in normalized device coordinates
    pub aim_scale: f32,

    /// Launch velocity per unit of aim vector
    pub launch_multiplier: f32,

    /// Projectile settings
    pub projectile: ProjectileConfig,

    /// Target layout
    pub targets: TargetConfig,
}

/// Projectile settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    /// Resting position the projectile launches from and resets to
    pub start_position: [f32; 3],

    /// Collision radius (also the uniform render scale)
    pub size: f32,

    /// Facing direction used while the velocity is exactly zero
    pub default_heading: [f32; 3],
}

/// Target layout: one shared box size, one position per target
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Full box size per axis, shared by all targets
    pub size: [f32; 3],

    /// Box center positions
    pub positions: Vec<[f32; 3]>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, -10.0, 0.0],
            aim_scale: 10.0,
            launch_multiplier: 3.0,
            projectile: ProjectileConfig::default(),
            targets: TargetConfig::default(),
        }
    }
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            // Atop the launcher pedestal at the near end of the range
            start_position: [-30.0, 5.0, -35.0],
            size: 1.0,
            default_heading: [1.0, 0.0, 0.0],
        }
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            size: [3.0, 12.0, 20.0],
            positions: vec![
                [21.0, 6.0, -35.0],
                [25.0, 6.0, -35.0],
                [23.0, 18.0, -35.0],
            ],
        }
    }
}

impl SimConfig {
    /// Validate the configuration
    ///
    /// Non-positive sizes and a zero default heading are caller contract
    /// violations, rejected here rather than silently accepted.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.projectile.size > 0.0) {
            return Err(SimError::InvalidProjectileSize(self.projectile.size));
        }

        let [sx, sy, sz] = self.targets.size;
        if !(sx > 0.0 && sy > 0.0 && sz > 0.0) {
            return Err(SimError::InvalidTargetSize(sx, sy, sz));
        }

        let [hx, hy, hz] = self.projectile.default_heading;
        if hx == 0.0 && hy == 0.0 && hz == 0.0 {
            return Err(SimError::ZeroDefaultHeading);
        }

        Ok(())
    }
}

impl Config for SimConfig {}
