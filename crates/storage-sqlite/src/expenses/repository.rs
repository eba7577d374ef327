use spendfolio_core::constants::DATE_FORMAT;
use spendfolio_core::expenses::{Expense, ExpenseRepositoryTrait, ExpenseUpdate, NewExpense};
use spendfolio_core::errors::{DatabaseError, Result};

use super::model::{ExpenseDB, NewExpenseDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::expenses;
use async_trait::async_trait;
use chrono::Utc;
use diesel::dsl::count_star;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct ExpenseRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl ExpenseRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        ExpenseRepository { pool, writer }
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    fn get_expenses_by_user(&self, user_id_filter: &str) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expenses::table
            .filter(expenses::user_id.eq(user_id_filter))
            .order((expenses::created_at.asc(), expenses::id.asc()))
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    fn get_expense(&self, user_id_filter: &str, expense_id: &str) -> Result<Option<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let row = expenses::table
            .filter(expenses::id.eq(expense_id))
            .filter(expenses::user_id.eq(user_id_filter))
            .first::<ExpenseDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Expense::from))
    }

    fn has_expenses_in_category(&self, user_id_filter: &str, category: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let count: i64 = expenses::table
            .filter(expenses::user_id.eq(user_id_filter))
            .filter(expenses::category.eq(category))
            .select(count_star())
            .first(&mut conn)
            .map_err(StorageError::from)?;
        Ok(count > 0)
    }

    async fn create_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense> {
        let user_id_owned = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let now = Utc::now().to_rfc3339();
                let new_expense_db = NewExpenseDB {
                    id: new_expense.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                    user_id: user_id_owned,
                    category: new_expense.category,
                    amount: new_expense.amount.to_string(),
                    description: new_expense.description,
                    date: new_expense.date.format(DATE_FORMAT).to_string(),
                    created_at: now.clone(),
                    updated_at: now,
                };

                let result_db = diesel::insert_into(expenses::table)
                    .values(&new_expense_db)
                    .returning(ExpenseDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Expense::from(result_db))
            })
            .await
    }

    async fn update_expense(
        &self,
        user_id: &str,
        expense_id: &str,
        update: ExpenseUpdate,
    ) -> Result<Expense> {
        let user_id_owned = user_id.to_string();
        let expense_id_owned = expense_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let now = Utc::now().to_rfc3339();
                let affected = diesel::update(
                    expenses::table
                        .filter(expenses::id.eq(&expense_id_owned))
                        .filter(expenses::user_id.eq(&user_id_owned)),
                )
                .set((
                    expenses::category.eq(&update.category),
                    expenses::amount.eq(update.amount.to_string()),
                    expenses::description.eq(&update.description),
                    expenses::date.eq(update.date.format(DATE_FORMAT).to_string()),
                    expenses::updated_at.eq(&now),
                ))
                .execute(conn)
                .map_err(StorageError::from)?;

                if affected == 0 {
                    return Err(DatabaseError::NotFound(format!(
                        "Expense {} not found",
                        expense_id_owned
                    ))
                    .into());
                }

                let result_db = expenses::table
                    .find(&expense_id_owned)
                    .first::<ExpenseDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Expense::from(result_db))
            })
            .await
    }

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<usize> {
        let user_id_owned = user_id.to_string();
        let expense_id_owned = expense_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                // 0 rows affected is a no-op, not an error: the id either
                // does not exist or belongs to another user.
                Ok(diesel::delete(
                    expenses::table
                        .filter(expenses::id.eq(expense_id_owned))
                        .filter(expenses::user_id.eq(user_id_owned)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
