//! HTTP error mapping for core errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use spendfolio_core::budgets::BudgetError;
use spendfolio_core::errors::{DatabaseError, Error};
use spendfolio_core::expenses::ExpenseError;
use spendfolio_core::users::UserError;

use crate::auth::AuthError;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Response-side wrapper around the core error type.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::UNAUTHORIZED,
            message: message.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match &err {
            Error::Database(DatabaseError::NotFound(_))
            | Error::User(UserError::NotFound(_))
            | Error::Expense(ExpenseError::NotFound(_))
            | Error::Budget(BudgetError::NotFound(_)) => StatusCode::NOT_FOUND,

            Error::Database(DatabaseError::UniqueViolation(_))
            | Error::User(UserError::UsernameTaken(_))
            | Error::Budget(BudgetError::DuplicateCategory(_))
            | Error::Budget(BudgetError::HasExpenses(_)) => StatusCode::CONFLICT,

            Error::Validation(_)
            | Error::User(UserError::EmptyUsername)
            | Error::Expense(ExpenseError::NegativeAmount(_))
            | Error::Expense(ExpenseError::EmptyCategory)
            | Error::Budget(BudgetError::NegativeLimit(_))
            | Error::Budget(BudgetError::EmptyCategory) => StatusCode::UNPROCESSABLE_ENTITY,

            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Internal error serving request: {err}");
        }

        ApiError {
            status,
            message: err.to_string(),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError {
            status: StatusCode::UNAUTHORIZED,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
