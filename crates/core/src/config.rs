//! Core configuration
//!
//! Board dimensions and the rotation-system name, read from environment
//! variables with defaults:
//!
//! - `SRS_ROTATION_SYSTEM`: rotation system name (default: "SRS")
//! - `SRS_BOARD_WIDTH`: columns (default: 10)
//! - `SRS_BOARD_HEIGHT`: rows including the spawn buffer row (default: 21)

use tracing::warn;

use crate::error::{CoreError, Result};
use crate::kicks::RotationSystem;
use crate::matrix::Matrix;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Smallest board that still fits an I piece in every orientation.
const MIN_DIMENSION: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub rotation_system: String,
    pub width: u8,
    pub height: u8,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            rotation_system: "SRS".to_string(),
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }
}

impl CoreConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CoreConfig::from_env`] but with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let rotation_system = lookup("SRS_ROTATION_SYSTEM")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.rotation_system);
        let width = parse_dimension(&lookup, "SRS_BOARD_WIDTH", defaults.width);
        let height = parse_dimension(&lookup, "SRS_BOARD_HEIGHT", defaults.height);

        Self {
            rotation_system,
            width,
            height,
        }
    }

    /// Reject board dimensions the core cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.width < MIN_DIMENSION || self.height < MIN_DIMENSION {
            return Err(CoreError::Configuration(format!(
                "board must be at least {}x{} (got {}x{})",
                MIN_DIMENSION, MIN_DIMENSION, self.width, self.height
            )));
        }
        Ok(())
    }

    /// Resolve the configured rotation system from the shared registry.
    pub fn rotation_system(&self) -> Result<&'static RotationSystem> {
        RotationSystem::shared(&self.rotation_system)
    }

    /// Build an empty matrix with the configured dimensions.
    pub fn matrix(&self) -> Result<Matrix> {
        self.validate()?;
        Ok(Matrix::new(self.width, self.height))
    }
}

fn parse_dimension(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u8) -> u8 {
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!(key, value = %raw, default, "ignoring unparsable board dimension");
                default
            }
        },
    }
}
