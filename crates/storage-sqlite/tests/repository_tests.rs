//! Integration tests for the SQLite repositories against a real database file.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use spendfolio_core::budgets::{BudgetRepositoryTrait, BudgetUpdate, NewBudget};
use spendfolio_core::errors::{DatabaseError, Error};
use spendfolio_core::expenses::{ExpenseRepositoryTrait, ExpenseUpdate, NewExpense};
use spendfolio_core::users::{NewUser, UserRepositoryTrait};
use spendfolio_storage_sqlite::budgets::BudgetRepository;
use spendfolio_storage_sqlite::expenses::ExpenseRepository;
use spendfolio_storage_sqlite::users::UserRepository;
use spendfolio_storage_sqlite::{create_pool, run_migrations, spawn_writer};

struct TestStore {
    // Keeps the database directory alive for the duration of the test.
    _tmp: TempDir,
    users: UserRepository,
    expenses: ExpenseRepository,
    budgets: BudgetRepository,
}

fn setup() -> TestStore {
    let tmp = tempfile::tempdir().unwrap();
    let db_path = tmp.path().join("test.db");
    let pool = create_pool(db_path.to_str().unwrap()).unwrap();
    run_migrations(&pool).unwrap();
    let writer = spawn_writer((*pool).clone());

    TestStore {
        _tmp: tmp,
        users: UserRepository::new(pool.clone(), writer.clone()),
        expenses: ExpenseRepository::new(pool.clone(), writer.clone()),
        budgets: BudgetRepository::new(pool, writer),
    }
}

async fn register(store: &TestStore, username: &str) -> String {
    store
        .users
        .create_user(NewUser {
            id: None,
            username: username.to_string(),
            password_hash: "hash".to_string(),
        })
        .await
        .unwrap()
        .id
}

fn new_expense(category: &str, amount: rust_decimal::Decimal) -> NewExpense {
    NewExpense {
        id: None,
        category: category.to_string(),
        amount,
        description: Some("weekly shop".to_string()),
        date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
    }
}

#[tokio::test]
async fn expense_roundtrip() {
    let store = setup();
    let user_id = register(&store, "alice").await;

    let created = store
        .expenses
        .create_expense(&user_id, new_expense("Food", dec!(12.50)))
        .await
        .unwrap();
    assert_eq!(created.category, "Food");
    assert_eq!(created.amount, dec!(12.50));
    assert_eq!(created.date, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());

    let listed = store.expenses.get_expenses_by_user(&user_id).unwrap();
    assert_eq!(listed, vec![created.clone()]);

    let updated = store
        .expenses
        .update_expense(
            &user_id,
            &created.id,
            ExpenseUpdate {
                category: "Groceries".to_string(),
                amount: dec!(15),
                description: None,
                date: NaiveDate::from_ymd_opt(2025, 6, 16).unwrap(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.category, "Groceries");
    assert_eq!(updated.amount, dec!(15));
    assert_eq!(updated.description, None);

    let removed = store
        .expenses
        .delete_expense(&user_id, &created.id)
        .await
        .unwrap();
    assert_eq!(removed, 1);
    assert!(store.expenses.get_expenses_by_user(&user_id).unwrap().is_empty());
}

#[tokio::test]
async fn expenses_are_scoped_by_owner() {
    let store = setup();
    let alice = register(&store, "alice").await;
    let bob = register(&store, "bob").await;

    let expense = store
        .expenses
        .create_expense(&alice, new_expense("Food", dec!(10)))
        .await
        .unwrap();

    // Bob sees nothing and cannot fetch or delete Alice's record.
    assert!(store.expenses.get_expenses_by_user(&bob).unwrap().is_empty());
    assert!(store.expenses.get_expense(&bob, &expense.id).unwrap().is_none());

    let removed = store.expenses.delete_expense(&bob, &expense.id).await.unwrap();
    assert_eq!(removed, 0);
    assert!(store
        .expenses
        .get_expense(&alice, &expense.id)
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn delete_of_unknown_expense_is_noop() {
    let store = setup();
    let user_id = register(&store, "alice").await;

    let removed = store
        .expenses
        .delete_expense(&user_id, "no-such-id")
        .await
        .unwrap();
    assert_eq!(removed, 0);
}

#[tokio::test]
async fn update_of_unknown_expense_is_not_found() {
    let store = setup();
    let user_id = register(&store, "alice").await;

    let result = store
        .expenses
        .update_expense(
            &user_id,
            "no-such-id",
            ExpenseUpdate {
                category: "Food".to_string(),
                amount: dec!(1),
                description: None,
                date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::Database(DatabaseError::NotFound(_)))
    ));
}

#[tokio::test]
async fn expenses_keep_insertion_order() {
    let store = setup();
    let user_id = register(&store, "alice").await;

    for category in ["Rent", "Food", "Fuel"] {
        store
            .expenses
            .create_expense(&user_id, new_expense(category, dec!(1)))
            .await
            .unwrap();
    }

    let categories: Vec<String> = store
        .expenses
        .get_expenses_by_user(&user_id)
        .unwrap()
        .into_iter()
        .map(|e| e.category)
        .collect();
    assert_eq!(categories, vec!["Rent", "Food", "Fuel"]);
}

#[tokio::test]
async fn has_expenses_in_category_matches_exactly() {
    let store = setup();
    let user_id = register(&store, "alice").await;

    store
        .expenses
        .create_expense(&user_id, new_expense("Food", dec!(10)))
        .await
        .unwrap();

    assert!(store
        .expenses
        .has_expenses_in_category(&user_id, "Food")
        .unwrap());
    assert!(!store
        .expenses
        .has_expenses_in_category(&user_id, "food")
        .unwrap());
    assert!(!store
        .expenses
        .has_expenses_in_category(&user_id, "Fuel")
        .unwrap());
}

#[tokio::test]
async fn budget_roundtrip_and_unique_category() {
    let store = setup();
    let user_id = register(&store, "alice").await;

    let budget = store
        .budgets
        .create_budget(
            &user_id,
            NewBudget {
                id: None,
                category: "Food".to_string(),
                limit_amount: dec!(100),
            },
        )
        .await
        .unwrap();
    assert_eq!(budget.limit_amount, dec!(100));

    // Duplicate category for the same user violates the unique index.
    let duplicate = store
        .budgets
        .create_budget(
            &user_id,
            NewBudget {
                id: None,
                category: "Food".to_string(),
                limit_amount: dec!(200),
            },
        )
        .await;
    assert!(matches!(
        duplicate,
        Err(Error::Database(DatabaseError::UniqueViolation(_)))
    ));

    // The same category is fine for another user.
    let bob = register(&store, "bob").await;
    store
        .budgets
        .create_budget(
            &bob,
            NewBudget {
                id: None,
                category: "Food".to_string(),
                limit_amount: dec!(50),
            },
        )
        .await
        .unwrap();

    let updated = store
        .budgets
        .update_budget(
            &user_id,
            &budget.id,
            BudgetUpdate {
                category: "Food".to_string(),
                limit_amount: dec!(150),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.limit_amount, dec!(150));

    let by_category = store
        .budgets
        .get_budget_by_category(&user_id, "Food")
        .unwrap()
        .unwrap();
    assert_eq!(by_category.id, budget.id);

    let removed = store.budgets.delete_budget(&user_id, &budget.id).await.unwrap();
    assert_eq!(removed, 1);
    assert!(store.budgets.get_budgets_by_user(&user_id).unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_username_violates_unique_index() {
    let store = setup();
    register(&store, "alice").await;

    let duplicate = store
        .users
        .create_user(NewUser {
            id: None,
            username: "alice".to_string(),
            password_hash: "other".to_string(),
        })
        .await;

    assert!(matches!(
        duplicate,
        Err(Error::Database(DatabaseError::UniqueViolation(_)))
    ));
}
