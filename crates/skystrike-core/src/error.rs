//! Data-invariant violations rejected at construction time.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantError {
    #[error("max health must be positive and finite, got {0}")]
    InvalidMaxHealth(f64),
}
