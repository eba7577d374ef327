use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use spendfolio_core::budgets::{Budget, BudgetUpdate, NewBudget};

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::{CreateBudgetRequest, UpdateBudgetRequest};

async fn get_budgets(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<Budget>>> {
    let budgets = state.budget_service.get_budgets_by_user(&user.id)?;
    Ok(Json(budgets))
}

async fn create_budget(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<CreateBudgetRequest>,
) -> ApiResult<(StatusCode, Json<Budget>)> {
    let budget = state
        .budget_service
        .create_budget(
            &user.id,
            NewBudget {
                id: None,
                category: body.category,
                limit_amount: body.limit_amount,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(budget)))
}

async fn update_budget(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<UpdateBudgetRequest>,
) -> ApiResult<Json<Budget>> {
    let budget = state
        .budget_service
        .update_budget(
            &user.id,
            &id,
            BudgetUpdate {
                category: body.category,
                limit_amount: body.limit_amount,
            },
        )
        .await?;
    Ok(Json(budget))
}

async fn delete_budget(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<StatusCode> {
    let _ = state.budget_service.delete_budget(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/budgets", get(get_budgets).post(create_budget))
        .route("/budgets/{id}", put(update_budget).delete(delete_budget))
}
