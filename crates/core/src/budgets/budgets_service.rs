use std::sync::Arc;

use rust_decimal::Decimal;

use crate::budgets::budgets_errors::BudgetError;
use crate::budgets::budgets_model::{Budget, BudgetUpdate, NewBudget};
use crate::budgets::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::Result;
use crate::expenses::ExpenseRepositoryTrait;
use async_trait::async_trait;

pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl BudgetService {
    pub fn new(
        repository: Arc<dyn BudgetRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    ) -> Self {
        BudgetService {
            repository,
            expense_repository,
        }
    }

    fn validate(category: &str, limit_amount: Decimal) -> Result<String> {
        let category = category.trim();
        if category.is_empty() {
            return Err(BudgetError::EmptyCategory.into());
        }
        if limit_amount < Decimal::ZERO {
            return Err(BudgetError::NegativeLimit(limit_amount.to_string()).into());
        }
        Ok(category.to_string())
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn get_budgets_by_user(&self, user_id: &str) -> Result<Vec<Budget>> {
        self.repository.get_budgets_by_user(user_id)
    }

    fn get_budget(&self, user_id: &str, budget_id: &str) -> Result<Option<Budget>> {
        self.repository.get_budget(user_id, budget_id)
    }

    async fn create_budget(&self, user_id: &str, new_budget: NewBudget) -> Result<Budget> {
        let category = Self::validate(&new_budget.category, new_budget.limit_amount)?;

        if self
            .repository
            .get_budget_by_category(user_id, &category)?
            .is_some()
        {
            return Err(BudgetError::DuplicateCategory(category).into());
        }

        self.repository
            .create_budget(
                user_id,
                NewBudget {
                    category,
                    ..new_budget
                },
            )
            .await
    }

    async fn update_budget(
        &self,
        user_id: &str,
        budget_id: &str,
        update: BudgetUpdate,
    ) -> Result<Budget> {
        let category = Self::validate(&update.category, update.limit_amount)?;

        // Renaming onto another budget's category would break the
        // one-budget-per-category invariant.
        if let Some(existing) = self.repository.get_budget_by_category(user_id, &category)? {
            if existing.id != budget_id {
                return Err(BudgetError::DuplicateCategory(category).into());
            }
        }

        self.repository
            .update_budget(user_id, budget_id, BudgetUpdate { category, ..update })
            .await
    }

    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<usize> {
        let budget = self
            .repository
            .get_budget(user_id, budget_id)?
            .ok_or_else(|| BudgetError::NotFound(budget_id.to_string()))?;

        if self
            .expense_repository
            .has_expenses_in_category(user_id, &budget.category)?
        {
            return Err(BudgetError::HasExpenses(budget.category).into());
        }

        self.repository.delete_budget(user_id, budget_id).await
    }
}
