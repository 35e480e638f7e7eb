//! Error types for the rotation core.
//!
//! Only programming-error-class failures are represented here. A move blocked
//! by the board or a rotation whose every kick collides is a normal outcome
//! and is reported through the operation's `Ok` value instead.

use crate::types::GameAction;

/// Errors surfaced by the core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// Unsupported rotation-system name or unusable board configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Action outside the set accepted by the operation.
    #[error("invalid action: {action} is not a {expected} action")]
    InvalidAction {
        action: GameAction,
        expected: &'static str,
    },

    /// Transition key the selected kick table does not define.
    #[error("invalid action: no kick offsets for transition {key}")]
    MissingTransition { key: String },
}

impl CoreError {
    pub fn unsupported_rotation_system(name: &str) -> Self {
        CoreError::Configuration(format!("unsupported rotation system '{}'", name))
    }

    /// Whether this error belongs to the invalid-action class.
    pub fn is_invalid_action(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidAction { .. } | CoreError::MissingTransition { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
