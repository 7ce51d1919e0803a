//! Product Pricing Calculator
//!
//! Derives a product's selling price from cost price, margin percentage
//! and shipping charges:
//!
//!   selling = cost + cost * margin/100 + shipping
//!
//! In [`PricingMode::Auto`] the derived value overwrites `selling_price`
//! on every recalculation; in [`PricingMode::Manual`] the stored price is
//! caller-owned and recalculation leaves it untouched.

use crate::money::{to_decimal, to_f64};
use rust_decimal::prelude::*;
use serde::Serialize;
use shared::models::{PricingMode, Product};
use tracing::debug;

/// Staged result of a pricing calculation, for display
#[derive(Debug, Clone, Default, Serialize)]
pub struct PricingBreakdown {
    /// Cost price (basis for the margin)
    pub base_cost: f64,
    /// Margin amount; in Manual mode this is the effective margin implied
    /// by the stored selling price
    pub margin_amount: f64,
    pub shipping_charges: f64,
    pub selling_price: f64,
    pub total_with_services: f64,
}

/// Derive the selling price from cost, margin and shipping.
///
/// Assumes sanitized input; NaN coerces to zero at the decimal boundary.
/// No clamping and no error conditions.
pub fn calculate_selling_price(
    cost_price: f64,
    margin_percentage: f64,
    shipping_charges: f64,
) -> Decimal {
    let cost = to_decimal(cost_price);
    let margin = cost * to_decimal(margin_percentage) / Decimal::ONE_HUNDRED;
    cost + margin + to_decimal(shipping_charges)
}

/// Selling price plus shipping charges.
///
/// Linked service prices are never summed into this total; services are
/// attached to products for record keeping only.
pub fn calculate_total_with_services(selling_price: f64, shipping_charges: f64) -> Decimal {
    to_decimal(selling_price) + to_decimal(shipping_charges)
}

/// Effective margin percentage implied by a selling price.
///
/// Inverse of [`calculate_selling_price`]; returns zero when the cost
/// price is zero (no basis for a markup).
pub fn margin_from_prices(cost_price: f64, selling_price: f64, shipping_charges: f64) -> Decimal {
    let cost = to_decimal(cost_price);
    if cost.is_zero() {
        return Decimal::ZERO;
    }
    (to_decimal(selling_price) - to_decimal(shipping_charges) - cost) / cost * Decimal::ONE_HUNDRED
}

/// Full pricing breakdown for a product, respecting its pricing mode
pub fn calculate_breakdown(product: &Product) -> PricingBreakdown {
    let selling = match product.pricing_mode {
        PricingMode::Auto => calculate_selling_price(
            product.cost_price,
            product.margin_percentage,
            product.shipping_charges,
        ),
        PricingMode::Manual => to_decimal(product.selling_price),
    };
    let margin = selling - to_decimal(product.cost_price) - to_decimal(product.shipping_charges);

    PricingBreakdown {
        base_cost: product.cost_price,
        margin_amount: to_f64(margin),
        shipping_charges: product.shipping_charges,
        selling_price: to_f64(selling),
        total_with_services: to_f64(calculate_total_with_services(
            to_f64(selling),
            product.shipping_charges,
        )),
    }
}

/// Recompute and stamp `selling_price` on a product.
///
/// Only Auto-mode products are touched; a Manual price is never clobbered
/// by edits to cost, margin or shipping.
pub fn recalculate_pricing(product: &mut Product) {
    if product.pricing_mode == PricingMode::Auto {
        product.selling_price = to_f64(calculate_selling_price(
            product.cost_price,
            product.margin_percentage,
            product.shipping_charges,
        ));
    }

    debug!(
        product_id = product.id,
        mode = ?product.pricing_mode,
        selling_price = product.selling_price,
        "pricing recalculated"
    );
}

// ==================== Tests ====================
