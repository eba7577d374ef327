use spendfolio_core::budgets::{Budget, BudgetRepositoryTrait, BudgetUpdate, NewBudget};
use spendfolio_core::errors::{DatabaseError, Result};

use super::model::{BudgetDB, NewBudgetDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::budgets;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct BudgetRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        BudgetRepository { pool, writer }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn get_budgets_by_user(&self, user_id_filter: &str) -> Result<Vec<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = budgets::table
            .filter(budgets::user_id.eq(user_id_filter))
            .order((budgets::created_at.asc(), budgets::id.asc()))
            .load::<BudgetDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Budget::from).collect())
    }

    fn get_budget(&self, user_id_filter: &str, budget_id: &str) -> Result<Option<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let row = budgets::table
            .filter(budgets::id.eq(budget_id))
            .filter(budgets::user_id.eq(user_id_filter))
            .first::<BudgetDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Budget::from))
    }

    fn get_budget_by_category(
        &self,
        user_id_filter: &str,
        category_filter: &str,
    ) -> Result<Option<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let row = budgets::table
            .filter(budgets::user_id.eq(user_id_filter))
            .filter(budgets::category.eq(category_filter))
            .first::<BudgetDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Budget::from))
    }

    async fn create_budget(&self, user_id: &str, new_budget: NewBudget) -> Result<Budget> {
        let user_id_owned = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                let now = Utc::now().to_rfc3339();
                let new_budget_db = NewBudgetDB {
                    id: new_budget.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                    user_id: user_id_owned,
                    category: new_budget.category,
                    limit_amount: new_budget.limit_amount.to_string(),
                    created_at: now.clone(),
                    updated_at: now,
                };

                // The unique index on (user_id, category) backs up the
                // service-level duplicate check.
                let result_db = diesel::insert_into(budgets::table)
                    .values(&new_budget_db)
                    .returning(BudgetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Budget::from(result_db))
            })
            .await
    }

    async fn update_budget(
        &self,
        user_id: &str,
        budget_id: &str,
        update: BudgetUpdate,
    ) -> Result<Budget> {
        let user_id_owned = user_id.to_string();
        let budget_id_owned = budget_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                let now = Utc::now().to_rfc3339();
                let affected = diesel::update(
                    budgets::table
                        .filter(budgets::id.eq(&budget_id_owned))
                        .filter(budgets::user_id.eq(&user_id_owned)),
                )
                .set((
                    budgets::category.eq(&update.category),
                    budgets::limit_amount.eq(update.limit_amount.to_string()),
                    budgets::updated_at.eq(&now),
                ))
                .execute(conn)
                .map_err(StorageError::from)?;

                if affected == 0 {
                    return Err(DatabaseError::NotFound(format!(
                        "Budget {} not found",
                        budget_id_owned
                    ))
                    .into());
                }

                let result_db = budgets::table
                    .find(&budget_id_owned)
                    .first::<BudgetDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Budget::from(result_db))
            })
            .await
    }

    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<usize> {
        let user_id_owned = user_id.to_string();
        let budget_id_owned = budget_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    budgets::table
                        .filter(budgets::id.eq(budget_id_owned))
                        .filter(budgets::user_id.eq(user_id_owned)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
