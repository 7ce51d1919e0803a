//! Quotation / Bill of Quantities models
//!
//! A quotation owns an ordered list of sections; each section exclusively
//! owns its line items. Derived fields (`total_amount`, `subtotal`, the
//! quotation totals) are stamped by the totals engine, never edited
//! directly.

use crate::currency::CurrencyCode;
use crate::util::{now_millis, snowflake_id};
use serde::{Deserialize, Serialize};

/// Adjustment type for line-level discount and tax
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdjustmentType {
    /// Value interpreted as a percentage of the basis amount
    #[default]
    Percentage,
    /// Value interpreted as a fixed currency amount
    Fixed,
}

/// Quotation status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuotationStatus {
    #[default]
    Draft,
    Sent,
    Approved,
    Rejected,
}

/// Line item within a quotation section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuotationItem {
    /// Instance ID (uuid)
    pub id: String,
    pub description: String,
    pub quantity: f64,
    /// Unit rate
    pub rate: f64,
    /// Discount value, interpreted per `discount_type`
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub discount_type: AdjustmentType,
    /// Tax value, interpreted per `tax_type`
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub tax_type: AdjustmentType,
    /// Line total (derived)
    #[serde(default)]
    pub total_amount: f64,
}

impl QuotationItem {
    /// Create a new line item with form defaults (quantity 1, rate 0)
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            description: description.into(),
            quantity: 1.0,
            rate: 0.0,
            discount: 0.0,
            discount_type: AdjustmentType::Percentage,
            tax: 0.0,
            tax_type: AdjustmentType::Percentage,
            total_amount: 0.0,
        }
    }
}

/// Section of a quotation, exclusively owning its line items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuotationSection {
    pub id: String,
    pub title: String,
    /// Ordered line items (insertion order is preserved for display)
    pub items: Vec<QuotationItem>,
    /// Sum of item totals (derived)
    #[serde(default)]
    pub subtotal: f64,
}

impl QuotationSection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            items: Vec::new(),
            subtotal: 0.0,
        }
    }
}

/// Quotation entity
///
/// Quotation-level discount and tax are percentage-only; line items
/// support percentage-or-fixed. The asymmetry is deliberate and matches
/// the product behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quotation {
    pub id: i64,
    /// Human-facing reference (e.g. "QT-2026-0142")
    pub reference: String,
    pub client_name: String,
    pub currency: CurrencyCode,
    pub status: QuotationStatus,

    /// Ordered sections (exclusively owned)
    pub sections: Vec<QuotationSection>,

    /// Quotation-level discount, percent of subtotal
    #[serde(default)]
    pub discount_percentage: f64,
    /// Quotation-level tax, percent of the discounted subtotal
    #[serde(default)]
    pub tax_percentage: f64,

    // === Derived totals ===
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub discount_amount: f64,
    #[serde(default)]
    pub tax_amount: f64,
    #[serde(default)]
    pub total_amount: f64,

    pub created_at: i64,
    pub updated_at: i64,
}

impl Quotation {
    /// Create a new empty draft quotation
    pub fn new(
        reference: impl Into<String>,
        client_name: impl Into<String>,
        currency: CurrencyCode,
    ) -> Self {
        let now = now_millis();
        Self {
            id: snowflake_id(),
            reference: reference.into(),
            client_name: client_name.into(),
            currency,
            status: QuotationStatus::Draft,
            sections: Vec::new(),
            discount_percentage: 0.0,
            tax_percentage: 0.0,
            subtotal: 0.0,
            discount_amount: 0.0,
            tax_amount: 0.0,
            total_amount: 0.0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_draft(&self) -> bool {
        self.status == QuotationStatus::Draft
    }

    /// Total number of line items across all sections
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}
