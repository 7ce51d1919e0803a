//! Currency display formatting
//!
//! Converts an amount through the static rate table and renders it with
//! the currency symbol and locale digit grouping. This is presentation
//! only — rates are fixed configuration constants, not live market data,
//! and no precision guarantee beyond display rounding is made.

use crate::money::to_decimal;
use rust_decimal::prelude::*;
use shared::currency::{CurrencyCode, CurrencyTable};

/// Insert `,` every three digits from the right (western grouping)
fn group_western(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

/// Indian (en-IN) grouping: last three digits, then groups of two
/// (12,34,567)
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let head_bytes = head.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, b) in head_bytes.iter().enumerate() {
        if i > 0 && (head_bytes.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out.push(',');
    out.push_str(tail);
    out
}

/// Format an amount in the given display currency.
///
/// The amount is multiplied by the table's conversion rate, rounded
/// half-up to the currency's display precision (INR: whole rupees with
/// Indian digit grouping; all others: two decimals with western
/// grouping) and prefixed with the currency symbol.
pub fn format_currency(amount: f64, code: CurrencyCode, table: &CurrencyTable) -> String {
    let converted = to_decimal(amount) * to_decimal(table.rate(code));

    let decimals: u32 = match code {
        CurrencyCode::Inr => 0,
        _ => 2,
    };
    let rounded =
        converted.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let text = format!("{:.*}", decimals as usize, rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let grouped = match code {
        CurrencyCode::Inr => group_indian(int_part),
        _ => group_western(int_part),
    };

    match frac_part {
        Some(frac) => format!("{}{}{}.{}", code.symbol(), sign, grouped, frac),
        None => format!("{}{}{}", code.symbol(), sign, grouped),
    }
}

// ==================== Tests ====================
