//! Error types for the shared crate
//!
//! Standardized error types used across the workspace.

use thiserror::Error;

/// Errors surfaced by the totals engine and its validation helpers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Input rejected by a validation helper (non-finite, negative,
    /// or outside the allowed range)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Budget classification attempted with a zero allocated amount;
    /// the utilization rate is undefined
    #[error("allocated amount is zero, utilization rate is undefined")]
    ZeroAllocation,
}
