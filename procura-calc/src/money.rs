//! Money calculation utilities using rust_decimal for precision
//!
//! All calculator arithmetic is done using `Decimal` internally, then
//! converted to `f64` at the record boundary. Conversion never rounds:
//! stored derived amounts keep full precision, and rounding happens only
//! at display time (currency formatter) or where an operation is defined
//! on whole percents (budget utilization rate).

use rust_decimal::prelude::*;
use shared::error::CalcError;
use shared::models::{BudgetRecord, Product, QuotationItem};

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed monetary amount on any single field
const MAX_AMOUNT: f64 = 1_000_000_000.0;
/// Maximum allowed line-item quantity
const MAX_QUANTITY: f64 = 1_000_000.0;
/// Maximum allowed percentage value (margin, discount, tax)
const MAX_PERCENTAGE: f64 = 1_000.0;

/// Convert f64 to Decimal for calculation.
///
/// NaN and non-finite values convert to zero, which is the engine-wide
/// coercion policy for unsanitized form input.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage.
///
/// No rounding is applied; derived amounts are stored at full precision
/// and rounded only for display.
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field_name: &str) -> Result<(), CalcError> {
    if !value.is_finite() {
        return Err(CalcError::InvalidInput(format!(
            "{} must be a finite number, got {}",
            field_name, value
        )));
    }
    Ok(())
}

/// Validate a finite, non-negative amount within the global cap
fn require_amount(value: f64, field_name: &str) -> Result<(), CalcError> {
    require_finite(value, field_name)?;
    if value < 0.0 {
        return Err(CalcError::InvalidInput(format!(
            "{} must be non-negative, got {}",
            field_name, value
        )));
    }
    if value > MAX_AMOUNT {
        return Err(CalcError::InvalidInput(format!(
            "{} exceeds maximum allowed ({}), got {}",
            field_name, MAX_AMOUNT, value
        )));
    }
    Ok(())
}

/// Validate a product's pricing inputs before persisting.
///
/// The pricing calculator itself never fails; this is the strict gate for
/// write paths.
pub fn validate_pricing_inputs(product: &Product) -> Result<(), CalcError> {
    require_amount(product.cost_price, "cost_price")?;
    require_amount(product.shipping_charges, "shipping_charges")?;
    require_amount(product.selling_price, "selling_price")?;

    require_finite(product.margin_percentage, "margin_percentage")?;
    if !(0.0..=MAX_PERCENTAGE).contains(&product.margin_percentage) {
        return Err(CalcError::InvalidInput(format!(
            "margin_percentage must be between 0 and {}, got {}",
            MAX_PERCENTAGE, product.margin_percentage
        )));
    }
    Ok(())
}

/// Validate a quotation line item before persisting.
///
/// Rejects the negative discount/tax values the calculator would pass
/// through arithmetically (a negative discount raises the total).
pub fn validate_line_item(item: &QuotationItem) -> Result<(), CalcError> {
    require_finite(item.quantity, "quantity")?;
    if item.quantity <= 0.0 {
        return Err(CalcError::InvalidInput(format!(
            "quantity must be positive, got {}",
            item.quantity
        )));
    }
    if item.quantity > MAX_QUANTITY {
        return Err(CalcError::InvalidInput(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, item.quantity
        )));
    }

    require_amount(item.rate, "rate")?;
    require_amount(item.discount, "discount")?;
    require_amount(item.tax, "tax")?;
    Ok(())
}

/// Validate a budget's inputs before persisting
pub fn validate_budget_inputs(budget: &BudgetRecord) -> Result<(), CalcError> {
    require_amount(budget.allocated_amount, "allocated_amount")?;
    require_amount(budget.spent_amount, "spent_amount")?;
    if budget.allocated_amount == 0.0 {
        return Err(CalcError::ZeroAllocation);
    }
    Ok(())
}
