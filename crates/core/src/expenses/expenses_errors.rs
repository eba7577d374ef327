use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExpenseError {
    #[error("Expense not found: {0}")]
    NotFound(String),

    #[error("Expense amount must not be negative, got {0}")]
    NegativeAmount(String),

    #[error("Expense category must not be empty")]
    EmptyCategory,
}
