//! Budget Model

use crate::util::{now_millis, snowflake_id};
use serde::{Deserialize, Serialize};

/// Budget status tier, derived from the utilization rate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetStatus {
    #[default]
    Healthy,
    Warning,
    Critical,
    Exceeded,
}

/// Budget entity
///
/// `remaining_amount`, `utilization_rate` and `status` are derived and
/// recomputed whenever `allocated_amount` or `spent_amount` changes. The
/// status is never stored independently of its inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetRecord {
    pub id: i64,
    pub name: String,
    /// Category reference (String ID)
    pub category: String,
    /// Budget period label (e.g. "2026-Q3")
    pub period: String,

    pub allocated_amount: f64,
    pub spent_amount: f64,

    // === Derived ===
    /// allocated - spent; negative when over budget
    #[serde(default)]
    pub remaining_amount: f64,
    /// Spent as a whole percent of allocated (rounded half away from zero)
    #[serde(default)]
    pub utilization_rate: i32,
    #[serde(default)]
    pub status: BudgetStatus,

    pub created_at: i64,
    pub updated_at: i64,
}

impl BudgetRecord {
    /// Create a new budget with nothing spent yet
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        allocated_amount: f64,
        period: impl Into<String>,
    ) -> Self {
        let now = now_millis();
        Self {
            id: snowflake_id(),
            name: name.into(),
            category: category.into(),
            period: period.into(),
            allocated_amount,
            spent_amount: 0.0,
            remaining_amount: allocated_amount,
            utilization_rate: 0,
            status: BudgetStatus::Healthy,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining_amount < 0.0
    }

    /// Apply a partial update, bumping `updated_at`.
    ///
    /// Derived fields are NOT recomputed here; callers run the budget
    /// classifier afterwards so status can never go stale.
    pub fn apply_update(&mut self, update: BudgetUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(period) = update.period {
            self.period = period;
        }
        if let Some(allocated_amount) = update.allocated_amount {
            self.allocated_amount = allocated_amount;
        }
        if let Some(spent_amount) = update.spent_amount {
            self.spent_amount = spent_amount;
        }
        self.updated_at = now_millis();
    }
}

/// Create budget payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetCreate {
    pub name: String,
    pub category: String,
    pub period: String,
    pub allocated_amount: f64,
    pub spent_amount: Option<f64>,
}

impl From<BudgetCreate> for BudgetRecord {
    // Derived fields are NOT computed here; callers run the budget
    // classifier on the new record, same as after an update.
    fn from(payload: BudgetCreate) -> Self {
        let mut budget = BudgetRecord::new(
            payload.name,
            payload.category,
            payload.allocated_amount,
            payload.period,
        );
        budget.spent_amount = payload.spent_amount.unwrap_or(0.0);
        budget
    }
}

/// Update budget payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BudgetUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub period: Option<String>,
    pub allocated_amount: Option<f64>,
    pub spent_amount: Option<f64>,
}
