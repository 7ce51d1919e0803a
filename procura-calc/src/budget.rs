//! Budget Utilization Classifier
//!
//! Derives remaining amount, utilization rate and status tier from a
//! budget's allocated and spent amounts. The status thresholds operate on
//! the ROUNDED whole-percent rate, first match wins:
//!
//!   rate > 100 -> Exceeded
//!   rate >  90 -> Critical
//!   rate >  75 -> Warning
//!   otherwise  -> Healthy
//!
//! Thresholds are exclusive lower bounds: exactly 90 is Warning, exactly
//! 100 is Critical. Because classification happens after rounding, a
//! spend of 100.4% rounds to 100 and does NOT classify as Exceeded —
//! a known quirk of the rate-first design, preserved deliberately.

use crate::money::{to_decimal, to_f64};
use rust_decimal::prelude::*;
use serde::Serialize;
use shared::error::CalcError;
use shared::models::{BudgetRecord, BudgetStatus};
use tracing::debug;

/// Result of classifying one budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetClassification {
    /// allocated - spent; negative when over budget
    pub remaining_amount: f64,
    /// Whole-percent utilization, rounded half away from zero
    pub utilization_rate: i32,
    pub status: BudgetStatus,
}

/// Status tier for a rounded utilization rate; first match wins
fn status_for_rate(rate: i32) -> BudgetStatus {
    if rate > 100 {
        BudgetStatus::Exceeded
    } else if rate > 90 {
        BudgetStatus::Critical
    } else if rate > 75 {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Healthy
    }
}

/// Classify a budget from its allocated and spent amounts.
///
/// A zero allocated amount has no defined utilization rate and returns
/// [`CalcError::ZeroAllocation`] rather than propagating NaN into the
/// record. Negative inputs are rejected as invalid.
pub fn classify_budget(
    allocated_amount: f64,
    spent_amount: f64,
) -> Result<BudgetClassification, CalcError> {
    let allocated = to_decimal(allocated_amount);
    let spent = to_decimal(spent_amount);

    if allocated < Decimal::ZERO {
        return Err(CalcError::InvalidInput(format!(
            "allocated_amount must be non-negative, got {}",
            allocated_amount
        )));
    }
    if spent < Decimal::ZERO {
        return Err(CalcError::InvalidInput(format!(
            "spent_amount must be non-negative, got {}",
            spent_amount
        )));
    }
    if allocated.is_zero() {
        return Err(CalcError::ZeroAllocation);
    }

    let remaining = allocated - spent;
    let rate = (spent / allocated * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i32()
        .unwrap_or(i32::MAX); // saturate on absurd spend/allocation ratios

    Ok(BudgetClassification {
        remaining_amount: to_f64(remaining),
        utilization_rate: rate,
        status: status_for_rate(rate),
    })
}

/// Recompute and stamp a budget's derived fields.
///
/// Invariant: after this call `status` matches the threshold function of
/// the current inputs — a stale status is never left behind.
pub fn recalculate_budget(budget: &mut BudgetRecord) -> Result<(), CalcError> {
    let classification = classify_budget(budget.allocated_amount, budget.spent_amount)?;

    budget.remaining_amount = classification.remaining_amount;
    budget.utilization_rate = classification.utilization_rate;
    budget.status = classification.status;

    debug!(
        budget_id = budget.id,
        utilization_rate = budget.utilization_rate,
        status = ?budget.status,
        "budget reclassified"
    );
    Ok(())
}

/// Roll-up for the budgets overview page
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub total_budgets: usize,
    pub healthy_count: usize,
    pub warning_count: usize,
    pub critical_count: usize,
    pub exceeded_count: usize,
    pub total_allocated: f64,
    pub total_spent: f64,
    pub total_remaining: f64,
}

/// Aggregate a set of budgets into overview counters.
///
/// Relies on the stored `status` being current (the recalculation
/// invariant); records are not reclassified here.
pub fn summarize_budgets(budgets: &[BudgetRecord]) -> BudgetSummary {
    let mut summary = BudgetSummary {
        total_budgets: budgets.len(),
        ..Default::default()
    };

    let mut allocated = Decimal::ZERO;
    let mut spent = Decimal::ZERO;
    for budget in budgets {
        match budget.status {
            BudgetStatus::Healthy => summary.healthy_count += 1,
            BudgetStatus::Warning => summary.warning_count += 1,
            BudgetStatus::Critical => summary.critical_count += 1,
            BudgetStatus::Exceeded => summary.exceeded_count += 1,
        }
        allocated += to_decimal(budget.allocated_amount);
        spent += to_decimal(budget.spent_amount);
    }

    summary.total_allocated = to_f64(allocated);
    summary.total_spent = to_f64(spent);
    summary.total_remaining = to_f64(allocated - spent);
    summary
}

// ==================== Tests ====================
