//! Simulation errors

use thiserror::Error;

/// Rejected engine input. Raised before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("Invalid attack type: {0}")]
    InvalidAttackType(String),

    #[error("Unknown defense: {0}")]
    UnknownDefense(String),
}
