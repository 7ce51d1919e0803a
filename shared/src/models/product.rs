//! Product Model

use crate::util::{now_millis, snowflake_id};
use serde::{Deserialize, Serialize};

/// How a product's selling price is maintained
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingMode {
    /// Selling price is derived from cost, margin and shipping on every
    /// recalculation
    #[default]
    Auto,
    /// Selling price is set directly by the caller; recalculation leaves
    /// it untouched
    Manual,
}

/// Stock status derived from current/min/max levels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
    Overstock,
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Category reference (String ID, required)
    pub category: String,
    /// Supplier reference
    pub supplier_id: Option<i64>,

    // === Pricing ===
    pub cost_price: f64,
    /// Markup applied to cost price, in percent (e.g. 20 = 20%)
    pub margin_percentage: f64,
    pub shipping_charges: f64,
    /// Derived in Auto mode; caller-owned in Manual mode
    #[serde(default)]
    pub selling_price: f64,
    #[serde(default)]
    pub pricing_mode: PricingMode,

    // === Stock ===
    pub current_stock: i64,
    pub min_stock_level: i64,
    pub max_stock_level: i64,
    /// Replenishment trigger level (tracked, not part of status classification)
    pub reorder_point: i64,

    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Product {
    /// Create a new product with zeroed pricing and stock fields
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        let now = now_millis();
        Self {
            id: snowflake_id(),
            name: name.into(),
            category: category.into(),
            supplier_id: None,
            cost_price: 0.0,
            margin_percentage: 0.0,
            shipping_charges: 0.0,
            selling_price: 0.0,
            pricing_mode: PricingMode::Auto,
            current_stock: 0,
            min_stock_level: 0,
            max_stock_level: 0,
            reorder_point: 0,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, bumping `updated_at`.
    ///
    /// Derived fields (`selling_price` in Auto mode) are NOT recomputed
    /// here; callers run the pricing calculator afterwards.
    pub fn apply_update(&mut self, update: ProductUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(supplier_id) = update.supplier_id {
            self.supplier_id = Some(supplier_id);
        }
        if let Some(cost_price) = update.cost_price {
            self.cost_price = cost_price;
        }
        if let Some(margin_percentage) = update.margin_percentage {
            self.margin_percentage = margin_percentage;
        }
        if let Some(shipping_charges) = update.shipping_charges {
            self.shipping_charges = shipping_charges;
        }
        if let Some(selling_price) = update.selling_price {
            self.selling_price = selling_price;
        }
        if let Some(pricing_mode) = update.pricing_mode {
            self.pricing_mode = pricing_mode;
        }
        if let Some(current_stock) = update.current_stock {
            self.current_stock = current_stock;
        }
        if let Some(min_stock_level) = update.min_stock_level {
            self.min_stock_level = min_stock_level;
        }
        if let Some(max_stock_level) = update.max_stock_level {
            self.max_stock_level = max_stock_level;
        }
        if let Some(reorder_point) = update.reorder_point {
            self.reorder_point = reorder_point;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        self.updated_at = now_millis();
    }
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub category: String,
    pub supplier_id: Option<i64>,
    pub cost_price: Option<f64>,
    pub margin_percentage: Option<f64>,
    pub shipping_charges: Option<f64>,
    pub selling_price: Option<f64>,
    pub pricing_mode: Option<PricingMode>,
    pub current_stock: Option<i64>,
    pub min_stock_level: Option<i64>,
    pub max_stock_level: Option<i64>,
    pub reorder_point: Option<i64>,
}

impl From<ProductCreate> for Product {
    fn from(payload: ProductCreate) -> Self {
        let mut product = Product::new(payload.name, payload.category);
        product.supplier_id = payload.supplier_id;
        product.cost_price = payload.cost_price.unwrap_or(0.0);
        product.margin_percentage = payload.margin_percentage.unwrap_or(0.0);
        product.shipping_charges = payload.shipping_charges.unwrap_or(0.0);
        product.selling_price = payload.selling_price.unwrap_or(0.0);
        product.pricing_mode = payload.pricing_mode.unwrap_or_default();
        product.current_stock = payload.current_stock.unwrap_or(0);
        product.min_stock_level = payload.min_stock_level.unwrap_or(0);
        product.max_stock_level = payload.max_stock_level.unwrap_or(0);
        product.reorder_point = payload.reorder_point.unwrap_or(0);
        product
    }
}

/// Update product payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub supplier_id: Option<i64>,
    pub cost_price: Option<f64>,
    pub margin_percentage: Option<f64>,
    pub shipping_charges: Option<f64>,
    pub selling_price: Option<f64>,
    pub pricing_mode: Option<PricingMode>,
    pub current_stock: Option<i64>,
    pub min_stock_level: Option<i64>,
    pub max_stock_level: Option<i64>,
    pub reorder_point: Option<i64>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_update_leaves_unset_fields_alone() {
        let mut product = Product::new("Cement 50kg", "cat:building");
        product.cost_price = 100.0;
        product.margin_percentage = 20.0;

        product.apply_update(ProductUpdate {
            cost_price: Some(110.0),
            ..Default::default()
        });

        assert_eq!(product.cost_price, 110.0);
        assert_eq!(product.margin_percentage, 20.0);
        assert_eq!(product.name, "Cement 50kg");
    }

    #[test]
    fn test_create_payload_defaults() {
        let product: Product = ProductCreate {
            name: "Rebar 12mm".to_string(),
            category: "cat:steel".to_string(),
            supplier_id: Some(42),
            cost_price: Some(7.5),
            margin_percentage: None,
            shipping_charges: None,
            selling_price: None,
            pricing_mode: None,
            current_stock: Some(250),
            min_stock_level: Some(50),
            max_stock_level: Some(500),
            reorder_point: None,
        }
        .into();

        assert_eq!(product.cost_price, 7.5);
        assert_eq!(product.margin_percentage, 0.0);
        assert_eq!(product.pricing_mode, PricingMode::Auto);
        assert_eq!(product.reorder_point, 0);
        assert!(product.is_active);
    }
}
