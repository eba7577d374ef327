use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use chrono::Utc;
use spendfolio_core::expenses::{Expense, ExpenseUpdate, NewExpense};

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::{CreateExpenseRequest, UpdateExpenseRequest};

async fn get_expenses(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<Expense>>> {
    let expenses = state.expense_service.get_expenses_by_user(&user.id)?;
    Ok(Json(expenses))
}

async fn create_expense(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<CreateExpenseRequest>,
) -> ApiResult<(StatusCode, Json<Expense>)> {
    let date = body.date.unwrap_or_else(|| Utc::now().date_naive());
    let expense = state
        .expense_service
        .create_expense(
            &user.id,
            NewExpense {
                id: None,
                category: body.category,
                amount: body.amount,
                description: body.description,
                date,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

async fn update_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<UpdateExpenseRequest>,
) -> ApiResult<Json<Expense>> {
    let expense = state
        .expense_service
        .update_expense(
            &user.id,
            &id,
            ExpenseUpdate {
                category: body.category,
                amount: body.amount,
                description: body.description,
                date: body.date,
            },
        )
        .await?;
    Ok(Json(expense))
}

async fn delete_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<StatusCode> {
    let _ = state.expense_service.delete_expense(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses", get(get_expenses).post(create_expense))
        .route("/expenses/{id}", put(update_expense).delete(delete_expense))
}
