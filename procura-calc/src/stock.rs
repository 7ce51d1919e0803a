//! Stock Status Classifier
//!
//! Derives the inventory status tier from current/min/max stock levels.
//! The check order is part of the contract: zero-stock wins over
//! low-stock even when `min_stock_level` is 0.

use shared::models::{Product, StockStatus};

/// Classify a stock level. Ordered checks, first match wins:
/// out-of-stock, low-stock, overstock, in-stock.
pub fn classify_stock(
    current_stock: i64,
    min_stock_level: i64,
    max_stock_level: i64,
) -> StockStatus {
    if current_stock == 0 {
        StockStatus::OutOfStock
    } else if current_stock <= min_stock_level {
        StockStatus::LowStock
    } else if current_stock > max_stock_level {
        StockStatus::Overstock
    } else {
        StockStatus::InStock
    }
}

/// Classify a product's stock from its own levels
pub fn classify_product_stock(product: &Product) -> StockStatus {
    classify_stock(
        product.current_stock,
        product.min_stock_level,
        product.max_stock_level,
    )
}

/// Whether replenishment should be triggered.
///
/// The reorder point is tracked separately from the status classifier;
/// a product can be InStock and still need reordering.
pub fn needs_reorder(current_stock: i64, reorder_point: i64) -> bool {
    current_stock <= reorder_point
}

// ==================== Tests ====================
