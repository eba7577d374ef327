use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;

use crate::budgets::{Budget, BudgetRepositoryTrait};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::expenses::{Expense, ExpenseRepositoryTrait};
use crate::spending::spending_model::{BudgetStatus, CategorySpending, SpendingReport};

/// Trait defining the contract for the spending service
pub trait SpendingServiceTrait: Send + Sync {
    fn get_spending_report(&self, user_id: &str) -> Result<SpendingReport>;
    fn get_category_breakdown(&self, user_id: &str) -> Result<Vec<CategorySpending>>;
}

/// Computes the spending report for one user's records.
///
/// Expenses and budgets must belong to the same user; that is the caller's
/// responsibility. Categories match by case-sensitive string equality.
/// Status rows keep the order of the budget sequence; expense categories
/// without a budget contribute to the total but produce no status row.
pub fn compute_status(expenses: &[Expense], budgets: &[Budget]) -> SpendingReport {
    let mut spent_by_category: HashMap<&str, Decimal> = HashMap::new();
    let mut total = Decimal::zero();

    for expense in expenses {
        total += expense.amount;
        *spent_by_category
            .entry(expense.category.as_str())
            .or_insert_with(Decimal::zero) += expense.amount;
    }

    let statuses = budgets
        .iter()
        .map(|budget| {
            let spent_amount = spent_by_category
                .get(budget.category.as_str())
                .copied()
                .unwrap_or_else(Decimal::zero);
            // Zero limits would divide by zero; their percentage is
            // not-applicable rather than an error.
            let percentage_spent = if budget.limit_amount > Decimal::zero() {
                Some(
                    (spent_amount / budget.limit_amount * Decimal::ONE_HUNDRED)
                        .round_dp(DISPLAY_DECIMAL_PRECISION),
                )
            } else {
                None
            };

            BudgetStatus {
                category: budget.category.clone(),
                limit_amount: budget.limit_amount,
                spent_amount,
                remaining_amount: budget.limit_amount - spent_amount,
                percentage_spent,
            }
        })
        .collect();

    SpendingReport { total, statuses }
}

/// Sums expenses per category, in first-occurrence order over all
/// categories, budgeted or not.
pub fn sum_by_category(expenses: &[Expense]) -> Vec<CategorySpending> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, Decimal> = HashMap::new();

    for expense in expenses {
        if !totals.contains_key(expense.category.as_str()) {
            order.push(expense.category.as_str());
        }
        *totals
            .entry(expense.category.as_str())
            .or_insert_with(Decimal::zero) += expense.amount;
    }

    order
        .into_iter()
        .map(|category| CategorySpending {
            category: category.to_string(),
            amount: totals[category],
        })
        .collect()
}

pub struct SpendingService {
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
}

impl SpendingService {
    pub fn new(
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
    ) -> Self {
        SpendingService {
            expense_repository,
            budget_repository,
        }
    }
}

impl SpendingServiceTrait for SpendingService {
    fn get_spending_report(&self, user_id: &str) -> Result<SpendingReport> {
        debug!("Computing spending report for user {}", user_id);
        let expenses = self.expense_repository.get_expenses_by_user(user_id)?;
        let budgets = self.budget_repository.get_budgets_by_user(user_id)?;
        Ok(compute_status(&expenses, &budgets))
    }

    fn get_category_breakdown(&self, user_id: &str) -> Result<Vec<CategorySpending>> {
        let expenses = self.expense_repository.get_expenses_by_user(user_id)?;
        Ok(sum_by_category(&expenses))
    }
}
