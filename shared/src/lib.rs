//! Shared types for the Procura suite
//!
//! Domain records used across the administration modules (catalog
//! products, quotations/BOQ, budgets), plus currency configuration,
//! error types and ID/timestamp utilities.

pub mod currency;
pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use currency::{CurrencyCode, CurrencyTable};
pub use error::CalcError;
pub use serde::{Deserialize, Serialize};
