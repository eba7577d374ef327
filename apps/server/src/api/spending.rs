use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use spendfolio_core::spending::{CategorySpending, SpendingReport};

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

/// Budget statuses plus the overall total, as rendered on the expense list.
async fn get_spending_report(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<SpendingReport>> {
    let report = state.spending_service.get_spending_report(&user.id)?;
    Ok(Json(report))
}

/// Per-category totals over all categories, budgeted or not.
async fn get_category_breakdown(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<CategorySpending>>> {
    let breakdown = state.spending_service.get_category_breakdown(&user.id)?;
    Ok(Json(breakdown))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/spending/report", get(get_spending_report))
        .route("/spending/by-category", get(get_category_breakdown))
}
