//! Domain records for the administration modules

pub mod budget;
pub mod product;
pub mod quotation;

pub use budget::{BudgetCreate, BudgetRecord, BudgetStatus, BudgetUpdate};
pub use product::{PricingMode, Product, ProductCreate, ProductUpdate, StockStatus};
pub use quotation::{
    AdjustmentType, Quotation, QuotationItem, QuotationSection, QuotationStatus,
};
