//! Database models for budgets.

use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Database model for budgets
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct BudgetDB {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub limit_amount: String,
    pub created_at: String,
    pub updated_at: String,
}

impl BudgetDB {
    pub fn limit_decimal(&self) -> Decimal {
        self.limit_amount.parse().unwrap_or(Decimal::ZERO)
    }
}

/// Database model for creating a new budget
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::budgets)]
#[serde(rename_all = "camelCase")]
pub struct NewBudgetDB {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub limit_amount: String,
    pub created_at: String,
    pub updated_at: String,
}

// Conversion to domain models
impl From<BudgetDB> for spendfolio_core::budgets::Budget {
    fn from(db: BudgetDB) -> Self {
        let limit_amount = db.limit_decimal();
        Self {
            id: db.id,
            user_id: db.user_id,
            category: db.category,
            limit_amount,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
