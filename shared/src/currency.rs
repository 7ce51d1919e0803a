//! Currency configuration
//!
//! Display currencies recognized by the suite, their symbols, and the
//! static conversion-rate table. Rates are presentation-grade constants
//! (not live market rates) and are always passed to the formatter as an
//! explicit [`CurrencyTable`] value, never read from ambient state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Display currency
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Usd,
    Eur,
    Gbp,
    Inr,
    Jpy,
    Cad,
    Aud,
    Cny,
    Aed,
}

impl CurrencyCode {
    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Inr => "INR",
            Self::Jpy => "JPY",
            Self::Cad => "CAD",
            Self::Aud => "AUD",
            Self::Cny => "CNY",
            Self::Aed => "AED",
        }
    }

    /// Display symbol prefixed to formatted amounts
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Inr => "₹",
            Self::Jpy => "¥",
            Self::Cad => "C$",
            Self::Aud => "A$",
            Self::Cny => "¥",
            Self::Aed => "د.إ",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Default conversion rates relative to USD
const DEFAULT_RATES: [(CurrencyCode, f64); 9] = [
    (CurrencyCode::Usd, 1.0),
    (CurrencyCode::Eur, 0.92),
    (CurrencyCode::Gbp, 0.79),
    (CurrencyCode::Inr, 83.12),
    (CurrencyCode::Jpy, 149.50),
    (CurrencyCode::Cad, 1.36),
    (CurrencyCode::Aud, 1.52),
    (CurrencyCode::Cny, 7.24),
    (CurrencyCode::Aed, 3.67),
];

/// Static conversion-rate table, USD-based
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrencyTable {
    rates: HashMap<CurrencyCode, f64>,
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self {
            rates: DEFAULT_RATES.into_iter().collect(),
        }
    }
}

impl CurrencyTable {
    /// Conversion rate for `code`. A code missing from an override table
    /// falls back to 1.0 (amount displayed as-is).
    pub fn rate(&self, code: CurrencyCode) -> f64 {
        self.rates.get(&code).copied().unwrap_or(1.0)
    }

    /// Replace the rate for a single currency
    pub fn with_rate(mut self, code: CurrencyCode, rate: f64) -> Self {
        self.rates.insert(code, rate);
        self
    }

    /// Load an override table from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
