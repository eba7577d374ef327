//! Budget domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model for a per-category spending limit.
///
/// Invariant: at most one budget per (user, category) pair. A zero limit is
/// legal; the derived percentage for it is not-applicable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub limit_amount: Decimal,
    pub created_at: String,
    pub updated_at: String,
}

/// Input model for creating a new budget
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub id: Option<String>,
    pub category: String,
    pub limit_amount: Decimal,
}

/// Input model for updating a budget
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUpdate {
    pub category: String,
    pub limit_amount: Decimal,
}
