use thiserror::Error;

#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("Budget not found: {0}")]
    NotFound(String),

    #[error("A budget for category '{0}' already exists")]
    DuplicateCategory(String),

    #[error("Budget limit must not be negative, got {0}")]
    NegativeLimit(String),

    #[error("Budget category must not be empty")]
    EmptyCategory,

    #[error("Category '{0}' still has expenses and cannot be deleted")]
    HasExpenses(String),
}
