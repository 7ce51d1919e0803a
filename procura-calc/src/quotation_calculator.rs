//! Quotation-Level Total Calculator
//!
//! Rolls section subtotals into quotation totals:
//!
//!   subtotal = Σ section subtotals
//!   discount = subtotal * discount_percentage/100
//!   tax      = (subtotal - discount) * tax_percentage/100
//!   total    = subtotal - discount + tax
//!
//! Quotation-level discount and tax are percentage-only, unlike line
//! items which support fixed amounts. That asymmetry matches the product
//! behavior and is preserved here.

use crate::line_calculator::recalculate_section;
use crate::money::{to_decimal, to_f64};
use rust_decimal::prelude::*;
use serde::Serialize;
use shared::models::Quotation;
use tracing::debug;

/// Result of a quotation-level total calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuotationTotals {
    pub subtotal: f64,
    pub discount_amount: f64,
    pub tax_amount: f64,
    pub total_amount: f64,
}

fn quotation_totals_decimal(
    subtotal: Decimal,
    discount_percentage: f64,
    tax_percentage: f64,
) -> (Decimal, Decimal, Decimal) {
    let discount_amount = subtotal * to_decimal(discount_percentage) / Decimal::ONE_HUNDRED;
    let discounted = subtotal - discount_amount;
    let tax_amount = discounted * to_decimal(tax_percentage) / Decimal::ONE_HUNDRED;
    let total = discounted + tax_amount;
    (discount_amount, tax_amount, total)
}

/// Calculate quotation totals from section subtotals.
///
/// No intermediate rounding; the stored amounts keep full precision and
/// are rounded only for display.
pub fn calculate_quotation_totals(
    section_subtotals: &[f64],
    discount_percentage: f64,
    tax_percentage: f64,
) -> QuotationTotals {
    let subtotal: Decimal = section_subtotals.iter().copied().map(to_decimal).sum();
    let (discount_amount, tax_amount, total) =
        quotation_totals_decimal(subtotal, discount_percentage, tax_percentage);

    QuotationTotals {
        subtotal: to_f64(subtotal),
        discount_amount: to_f64(discount_amount),
        tax_amount: to_f64(tax_amount),
        total_amount: to_f64(total),
    }
}

/// Full bottom-up recalculation of a quotation.
///
/// Every line item is recomputed, then each section subtotal, then the
/// quotation totals — so a single call after any edit leaves no derived
/// field stale. Section subtotals are carried as `Decimal` into the
/// rollup to avoid re-parsing stored f64s.
pub fn recalculate_quotation(quotation: &mut Quotation) {
    let mut subtotal = Decimal::ZERO;
    for section in &mut quotation.sections {
        subtotal += recalculate_section(section);
    }

    let (discount_amount, tax_amount, total) = quotation_totals_decimal(
        subtotal,
        quotation.discount_percentage,
        quotation.tax_percentage,
    );

    quotation.subtotal = to_f64(subtotal);
    quotation.discount_amount = to_f64(discount_amount);
    quotation.tax_amount = to_f64(tax_amount);
    quotation.total_amount = to_f64(total);

    debug!(
        quotation_id = quotation.id,
        subtotal = quotation.subtotal,
        total = quotation.total_amount,
        "quotation totals recalculated"
    );
}

// ==================== Tests ====================
