//! Spending module - budget status aggregation over a user's records.

mod spending_model;
mod spending_service;

pub use spending_model::{BudgetStatus, CategorySpending, SpendingReport};
pub use spending_service::{compute_status, sum_by_category, SpendingService, SpendingServiceTrait};
