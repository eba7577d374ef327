use crate::errors::Result;
use crate::expenses::expenses_model::{Expense, ExpenseUpdate, NewExpense};
use async_trait::async_trait;

/// Trait for expense repository operations
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    /// All expenses owned by the user, in persisted (insertion) order.
    fn get_expenses_by_user(&self, user_id: &str) -> Result<Vec<Expense>>;

    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Option<Expense>>;

    /// Whether the user has at least one expense in the given category.
    fn has_expenses_in_category(&self, user_id: &str, category: &str) -> Result<bool>;

    async fn create_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense>;

    async fn update_expense(
        &self,
        user_id: &str,
        expense_id: &str,
        update: ExpenseUpdate,
    ) -> Result<Expense>;

    /// Returns the number of rows removed. Deleting an id that does not
    /// exist or is owned by another user removes 0 rows and is not an error.
    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<usize>;
}

/// Trait for expense service operations
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    fn get_expenses_by_user(&self, user_id: &str) -> Result<Vec<Expense>>;
    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Option<Expense>>;
    async fn create_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense>;
    async fn update_expense(
        &self,
        user_id: &str,
        expense_id: &str,
        update: ExpenseUpdate,
    ) -> Result<Expense>;
    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<usize>;
}
