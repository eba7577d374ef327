//! Derived spending models. None of these are persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Budget consumption for a single category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub category: String,
    pub limit_amount: Decimal,
    pub spent_amount: Decimal,
    pub remaining_amount: Decimal,
    /// spent / limit x 100. `None` when the limit is zero.
    pub percentage_spent: Option<Decimal>,
}

/// Complete spending report for one user.
///
/// `statuses` follows the order of the user's budgets so rendering stays
/// deterministic. `total` covers every expense, budgeted or not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpendingReport {
    pub total: Decimal,
    pub statuses: Vec<BudgetStatus>,
}

/// Total spend for one expense category, budgeted or not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpending {
    pub category: String,
    pub amount: Decimal,
}
