//! Line-Item Total Calculator
//!
//! Calculate BOQ line totals with support for:
//! - Percentage or fixed discounts (applied to quantity * rate)
//! - Percentage or fixed tax (applied to the discounted base)
//!
//! Uses rust_decimal for precision. No intermediate rounding: stored
//! totals keep full precision and are rounded only for display.

use crate::money::{to_decimal, to_f64};
use rust_decimal::prelude::*;
use serde::Serialize;
use shared::models::{AdjustmentType, QuotationItem, QuotationSection};

/// Staged result of a line-total calculation, for display
#[derive(Debug, Clone, Default, Serialize)]
pub struct LineCalculationResult {
    /// quantity * rate
    pub base: f64,
    pub discount_amount: f64,
    /// Base after discount (tax basis)
    pub taxable: f64,
    pub tax_amount: f64,
    /// Final line total
    pub total: f64,
}

fn line_total_decimal(item: &QuotationItem) -> (Decimal, Decimal, Decimal, Decimal, Decimal) {
    let base = to_decimal(item.quantity) * to_decimal(item.rate);

    let discount_amount = match item.discount_type {
        AdjustmentType::Percentage => base * to_decimal(item.discount) / Decimal::ONE_HUNDRED,
        AdjustmentType::Fixed => to_decimal(item.discount),
    };

    let taxable = base - discount_amount;

    let tax_amount = match item.tax_type {
        AdjustmentType::Percentage => taxable * to_decimal(item.tax) / Decimal::ONE_HUNDRED,
        AdjustmentType::Fixed => to_decimal(item.tax),
    };

    let total = taxable + tax_amount;
    (base, discount_amount, taxable, tax_amount, total)
}

/// Calculate a line item's total.
///
/// Steps: base = quantity * rate; discount per `discount_type`; tax per
/// `tax_type` on the discounted base. Missing/NaN inputs coerce to zero.
/// Negative discount or tax values pass through arithmetically (a
/// negative discount raises the total); [`crate::validate_line_item`] is
/// the strict gate for callers that want them rejected.
pub fn calculate_line_total(item: &QuotationItem) -> Decimal {
    line_total_decimal(item).4
}

/// Full staged breakdown of a line total, for display
pub fn calculate_line_breakdown(item: &QuotationItem) -> LineCalculationResult {
    let (base, discount_amount, taxable, tax_amount, total) = line_total_decimal(item);
    LineCalculationResult {
        base: to_f64(base),
        discount_amount: to_f64(discount_amount),
        taxable: to_f64(taxable),
        tax_amount: to_f64(tax_amount),
        total: to_f64(total),
    }
}

/// Recompute and stamp `total_amount` on a line item
pub fn recalculate_item(item: &mut QuotationItem) {
    item.total_amount = to_f64(calculate_line_total(item));
}

/// Sum of line totals over an ordered item sequence.
///
/// Order does not affect the sum; insertion order is preserved for
/// display only.
pub fn calculate_section_subtotal(items: &[QuotationItem]) -> Decimal {
    items.iter().map(calculate_line_total).sum()
}

/// Recompute every item in a section, then stamp the section subtotal.
///
/// Returns the subtotal as `Decimal` so quotation-level rollups can keep
/// full precision.
pub fn recalculate_section(section: &mut QuotationSection) -> Decimal {
    let mut subtotal = Decimal::ZERO;
    for item in &mut section.items {
        let total = calculate_line_total(item);
        item.total_amount = to_f64(total);
        subtotal += total;
    }
    section.subtotal = to_f64(subtotal);
    subtotal
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(
        quantity: f64,
        rate: f64,
        discount: f64,
        discount_type: AdjustmentType,
        tax: f64,
        tax_type: AdjustmentType,
    ) -> QuotationItem {
        let mut item = QuotationItem::new("Test item");
        item.quantity = quantity;
        item.rate = rate;
        item.discount = discount;
        item.discount_type = discount_type;
        item.tax = tax;
        item.tax_type = tax_type;
        item
    }

    // ==================== Percentage Mode ====================

    #[test]
    fn test_line_total_percentage_mode() {
        // base=500, discount=50, taxable=450, tax=22.5, total=472.5
        let item = item(
            10.0,
            50.0,
            10.0,
            AdjustmentType::Percentage,
            5.0,
            AdjustmentType::Percentage,
        );

        let breakdown = calculate_line_breakdown(&item);
        assert_eq!(breakdown.base, 500.0);
        assert_eq!(breakdown.discount_amount, 50.0);
        assert_eq!(breakdown.taxable, 450.0);
        assert_eq!(breakdown.tax_amount, 22.5);
        assert_eq!(breakdown.total, 472.5);
    }

    // ==================== Fixed Mode ====================

    #[test]
    fn test_line_total_fixed_mode() {
        // base=200, discount=20, taxable=180, tax=10, total=190
        let item = item(
            2.0,
            100.0,
            20.0,
            AdjustmentType::Fixed,
            10.0,
            AdjustmentType::Fixed,
        );

        let breakdown = calculate_line_breakdown(&item);
        assert_eq!(breakdown.base, 200.0);
        assert_eq!(breakdown.discount_amount, 20.0);
        assert_eq!(breakdown.taxable, 180.0);
        assert_eq!(breakdown.tax_amount, 10.0);
        assert_eq!(breakdown.total, 190.0);
    }

    #[test]
    fn test_line_total_mixed_modes() {
        // base=300, 10% discount=30, taxable=270, fixed tax=12, total=282
        let item = item(
            3.0,
            100.0,
            10.0,
            AdjustmentType::Percentage,
            12.0,
            AdjustmentType::Fixed,
        );
        assert_eq!(to_f64(calculate_line_total(&item)), 282.0);
    }

    // ==================== Edge Cases ====================

    #[test]
    fn test_fresh_item_totals_zero() {
        // Form default: quantity 1, rate 0
        let item = QuotationItem::new("Fresh row");
        assert_eq!(to_f64(calculate_line_total(&item)), 0.0);
    }

    #[test]
    fn test_nan_rate_coerces_to_zero() {
        let item = item(
            5.0,
            f64::NAN,
            0.0,
            AdjustmentType::Percentage,
            0.0,
            AdjustmentType::Percentage,
        );
        assert_eq!(to_f64(calculate_line_total(&item)), 0.0);
    }

    #[test]
    fn test_negative_discount_raises_total() {
        // Accepted arithmetically, not clamped: -10% discount on 100 = 110
        let item = item(
            1.0,
            100.0,
            -10.0,
            AdjustmentType::Percentage,
            0.0,
            AdjustmentType::Percentage,
        );
        assert_eq!(to_f64(calculate_line_total(&item)), 110.0);
    }

    #[test]
    fn test_fixed_discount_exceeding_base_goes_negative() {
        // No clamping in the calculator: 1*50 - 80 = -30
        let item = item(
            1.0,
            50.0,
            80.0,
            AdjustmentType::Fixed,
            0.0,
            AdjustmentType::Percentage,
        );
        assert_eq!(to_f64(calculate_line_total(&item)), -30.0);
    }

    #[test]
    fn test_no_intermediate_rounding() {
        // 3 * 9.99 = 29.97; 7% discount = 2.0979; taxable = 27.8721;
        // 13% tax = 3.623373; total = 31.495473 — kept at full precision
        let item = item(
            3.0,
            9.99,
            7.0,
            AdjustmentType::Percentage,
            13.0,
            AdjustmentType::Percentage,
        );
        assert_eq!(to_f64(calculate_line_total(&item)), 31.495473);
    }

    #[test]
    fn test_recalculate_item_is_idempotent() {
        let mut item = item(
            10.0,
            50.0,
            10.0,
            AdjustmentType::Percentage,
            5.0,
            AdjustmentType::Percentage,
        );
        recalculate_item(&mut item);
        let first = item.total_amount;
        recalculate_item(&mut item);
        assert_eq!(item.total_amount, first);
        assert_eq!(first, 472.5);
    }

    // ==================== Section Subtotal ====================

    #[test]
    fn test_section_subtotal_sums_in_any_order() {
        let a = item(
            1.0,
            100.0,
            0.0,
            AdjustmentType::Percentage,
            0.0,
            AdjustmentType::Percentage,
        );
        let b = item(
            2.0,
            75.5,
            0.0,
            AdjustmentType::Percentage,
            0.0,
            AdjustmentType::Percentage,
        );

        let forward = calculate_section_subtotal(&[a.clone(), b.clone()]);
        let reversed = calculate_section_subtotal(&[b, a]);
        assert_eq!(forward, reversed);
        assert_eq!(to_f64(forward), 251.0);
    }

    #[test]
    fn test_recalculate_section_stamps_items_and_subtotal() {
        let mut section = QuotationSection::new("Civil works");
        section.items.push(item(
            10.0,
            50.0,
            10.0,
            AdjustmentType::Percentage,
            5.0,
            AdjustmentType::Percentage,
        ));
        section.items.push(item(
            2.0,
            100.0,
            20.0,
            AdjustmentType::Fixed,
            10.0,
            AdjustmentType::Fixed,
        ));

        let subtotal = recalculate_section(&mut section);

        assert_eq!(section.items[0].total_amount, 472.5);
        assert_eq!(section.items[1].total_amount, 190.0);
        assert_eq!(section.subtotal, 662.5);
        assert_eq!(to_f64(subtotal), 662.5);
    }

    #[test]
    fn test_empty_section_subtotal_is_zero() {
        let mut section = QuotationSection::new("Empty");
        assert_eq!(recalculate_section(&mut section), Decimal::ZERO);
        assert_eq!(section.subtotal, 0.0);
    }
}
