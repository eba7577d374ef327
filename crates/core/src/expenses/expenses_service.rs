use std::sync::Arc;

use rust_decimal::Decimal;

use crate::errors::Result;
use crate::expenses::expenses_errors::ExpenseError;
use crate::expenses::expenses_model::{Expense, ExpenseUpdate, NewExpense};
use crate::expenses::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use async_trait::async_trait;

pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(repository: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        ExpenseService { repository }
    }

    /// Validates write input and returns the trimmed category.
    ///
    /// Invalid records are rejected here, before they can reach the store.
    fn validate(category: &str, amount: Decimal) -> Result<String> {
        let category = category.trim();
        if category.is_empty() {
            return Err(ExpenseError::EmptyCategory.into());
        }
        if amount < Decimal::ZERO {
            return Err(ExpenseError::NegativeAmount(amount.to_string()).into());
        }
        Ok(category.to_string())
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    fn get_expenses_by_user(&self, user_id: &str) -> Result<Vec<Expense>> {
        self.repository.get_expenses_by_user(user_id)
    }

    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Option<Expense>> {
        self.repository.get_expense(user_id, expense_id)
    }

    async fn create_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense> {
        let category = Self::validate(&new_expense.category, new_expense.amount)?;
        self.repository
            .create_expense(
                user_id,
                NewExpense {
                    category,
                    ..new_expense
                },
            )
            .await
    }

    async fn update_expense(
        &self,
        user_id: &str,
        expense_id: &str,
        update: ExpenseUpdate,
    ) -> Result<Expense> {
        let category = Self::validate(&update.category, update.amount)?;
        self.repository
            .update_expense(user_id, expense_id, ExpenseUpdate { category, ..update })
            .await
    }

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<usize> {
        let removed = self.repository.delete_expense(user_id, expense_id).await?;
        if removed == 0 {
            log::debug!(
                "Delete of expense {} for user {} removed nothing",
                expense_id,
                user_id
            );
        }
        Ok(removed)
    }
}
