use crate::budgets::budgets_model::{Budget, BudgetUpdate, NewBudget};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for budget repository operations
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    /// All budgets owned by the user, in persisted (insertion) order.
    fn get_budgets_by_user(&self, user_id: &str) -> Result<Vec<Budget>>;

    fn get_budget(&self, user_id: &str, budget_id: &str) -> Result<Option<Budget>>;

    fn get_budget_by_category(&self, user_id: &str, category: &str) -> Result<Option<Budget>>;

    async fn create_budget(&self, user_id: &str, new_budget: NewBudget) -> Result<Budget>;

    async fn update_budget(
        &self,
        user_id: &str,
        budget_id: &str,
        update: BudgetUpdate,
    ) -> Result<Budget>;

    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<usize>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn get_budgets_by_user(&self, user_id: &str) -> Result<Vec<Budget>>;
    fn get_budget(&self, user_id: &str, budget_id: &str) -> Result<Option<Budget>>;
    async fn create_budget(&self, user_id: &str, new_budget: NewBudget) -> Result<Budget>;
    async fn update_budget(
        &self,
        user_id: &str,
        budget_id: &str,
        update: BudgetUpdate,
    ) -> Result<Budget>;

    /// Delete a budget (fails while its category still has expenses).
    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<usize>;
}
