//! Database models for expenses.
//!
//! Money amounts and dates are stored as TEXT; the write path only persists
//! canonical `Decimal`/`NaiveDate` renderings, so the parse back into the
//! domain model cannot fail for rows this crate has written.

use chrono::NaiveDate;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spendfolio_core::constants::DATE_FORMAT;

/// Database model for expenses
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
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDB {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub amount: String,
    pub description: Option<String>,
    pub date: String,
    pub created_at: String,
    pub updated_at: String,
}

impl ExpenseDB {
    pub fn amount_decimal(&self) -> Decimal {
        self.amount.parse().unwrap_or(Decimal::ZERO)
    }
}

/// Database model for creating a new expense
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
#[serde(rename_all = "camelCase")]
pub struct NewExpenseDB {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub amount: String,
    pub description: Option<String>,
    pub date: String,
    pub created_at: String,
    pub updated_at: String,
}

// Conversion to domain models
impl From<ExpenseDB> for spendfolio_core::expenses::Expense {
    fn from(db: ExpenseDB) -> Self {
        let amount = db.amount_decimal();
        let date = NaiveDate::parse_from_str(&db.date, DATE_FORMAT).unwrap_or_default();
        Self {
            id: db.id,
            user_id: db.user_id,
            category: db.category,
            amount,
            description: db.description,
            date,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
