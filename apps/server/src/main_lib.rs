use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::auth::AuthManager;
use crate::config::Config;
use spendfolio_core::budgets::{BudgetService, BudgetServiceTrait};
use spendfolio_core::expenses::{ExpenseService, ExpenseServiceTrait};
use spendfolio_core::spending::{SpendingService, SpendingServiceTrait};
use spendfolio_core::users::{UserService, UserServiceTrait};
use spendfolio_storage_sqlite::budgets::BudgetRepository;
use spendfolio_storage_sqlite::db::{self, spawn_writer};
use spendfolio_storage_sqlite::expenses::ExpenseRepository;
use spendfolio_storage_sqlite::users::UserRepository;

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub expense_service: Arc<dyn ExpenseServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub spending_service: Arc<dyn SpendingServiceTrait>,
    pub auth: Arc<AuthManager>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("SPENDFOLIO_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = spawn_writer((*pool).clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let expense_repository = Arc::new(ExpenseRepository::new(pool.clone(), writer.clone()));
    let budget_repository = Arc::new(BudgetRepository::new(pool.clone(), writer.clone()));

    let user_service = Arc::new(UserService::new(user_repository));
    let expense_service = Arc::new(ExpenseService::new(expense_repository.clone()));
    let budget_service = Arc::new(BudgetService::new(
        budget_repository.clone(),
        expense_repository.clone(),
    ));
    let spending_service = Arc::new(SpendingService::new(expense_repository, budget_repository));

    let auth = Arc::new(AuthManager::new(&config.auth));

    Ok(Arc::new(AppState {
        user_service,
        expense_service,
        budget_service,
        spending_service,
        auth,
        db_path,
    }))
}
