//! End-to-end tests for expense/budget CRUD and the spending report.

mod common;

use axum::http::Method;
use common::{build_test_app, register, request, response_json};
use serde_json::json;

async fn create_expense(
    app: &axum::Router,
    token: &str,
    category: &str,
    amount: f64,
) -> serde_json::Value {
    let response = request(
        app,
        Method::POST,
        "/api/v1/expenses",
        Some(token),
        Some(json!({
            "category": category,
            "amount": amount,
            "description": "test",
            "date": "2025-06-15",
        })),
    )
    .await;
    assert_eq!(response.status(), 201);
    response_json(response).await
}

async fn create_budget(
    app: &axum::Router,
    token: &str,
    category: &str,
    limit_amount: f64,
) -> serde_json::Value {
    let response = request(
        app,
        Method::POST,
        "/api/v1/budgets",
        Some(token),
        Some(json!({ "category": category, "limitAmount": limit_amount })),
    )
    .await;
    assert_eq!(response.status(), 201);
    response_json(response).await
}

#[tokio::test]
async fn spending_report_aggregates_per_category() {
    let (app, _tmp) = build_test_app().await;
    let token = register(&app, "alice", "password").await;

    create_budget(&app, &token, "Food", 100.0).await;
    create_expense(&app, &token, "Food", 20.0).await;
    create_expense(&app, &token, "Food", 30.0).await;
    create_expense(&app, &token, "Fuel", 10.0).await;

    let response = request(
        &app,
        Method::GET,
        "/api/v1/spending/report",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(response.status(), 200);
    let report = response_json(response).await;

    assert_eq!(report["total"].as_f64().unwrap(), 60.0);
    let statuses = report["statuses"].as_array().unwrap();
    // Fuel has no budget: it counts toward the total but gets no row.
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0]["category"], "Food");
    assert_eq!(statuses[0]["limitAmount"].as_f64().unwrap(), 100.0);
    assert_eq!(statuses[0]["spentAmount"].as_f64().unwrap(), 50.0);
    assert_eq!(statuses[0]["remainingAmount"].as_f64().unwrap(), 50.0);
    assert_eq!(statuses[0]["percentageSpent"].as_f64().unwrap(), 50.0);
}

#[tokio::test]
async fn empty_account_reports_zero() {
    let (app, _tmp) = build_test_app().await;
    let token = register(&app, "alice", "password").await;

    let response = request(
        &app,
        Method::GET,
        "/api/v1/spending/report",
        Some(&token),
        None,
    )
    .await;
    let report = response_json(response).await;

    assert_eq!(report["total"].as_f64().unwrap(), 0.0);
    assert!(report["statuses"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn zero_limit_budget_has_no_percentage() {
    let (app, _tmp) = build_test_app().await;
    let token = register(&app, "alice", "password").await;

    create_budget(&app, &token, "Food", 0.0).await;
    create_expense(&app, &token, "Food", 25.0).await;

    let response = request(
        &app,
        Method::GET,
        "/api/v1/spending/report",
        Some(&token),
        None,
    )
    .await;
    let report = response_json(response).await;

    let status = &report["statuses"][0];
    assert_eq!(status["spentAmount"].as_f64().unwrap(), 25.0);
    assert!(status["percentageSpent"].is_null());
}

#[tokio::test]
async fn category_breakdown_covers_unbudgeted_categories() {
    let (app, _tmp) = build_test_app().await;
    let token = register(&app, "alice", "password").await;

    create_expense(&app, &token, "Food", 20.0).await;
    create_expense(&app, &token, "Fuel", 10.0).await;
    create_expense(&app, &token, "Food", 5.0).await;

    let response = request(
        &app,
        Method::GET,
        "/api/v1/spending/by-category",
        Some(&token),
        None,
    )
    .await;
    let breakdown = response_json(response).await;
    let rows = breakdown.as_array().unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["category"], "Food");
    assert_eq!(rows[0]["amount"].as_f64().unwrap(), 25.0);
    assert_eq!(rows[1]["category"], "Fuel");
    assert_eq!(rows[1]["amount"].as_f64().unwrap(), 10.0);
}

#[tokio::test]
async fn expense_crud_roundtrip() {
    let (app, _tmp) = build_test_app().await;
    let token = register(&app, "alice", "password").await;

    let expense = create_expense(&app, &token, "Food", 12.5).await;
    let id = expense["id"].as_str().unwrap();

    let update = request(
        &app,
        Method::PUT,
        &format!("/api/v1/expenses/{id}"),
        Some(&token),
        Some(json!({
            "category": "Groceries",
            "amount": 15.0,
            "description": null,
            "date": "2025-06-16",
        })),
    )
    .await;
    assert_eq!(update.status(), 200);
    let updated = response_json(update).await;
    assert_eq!(updated["category"], "Groceries");
    assert_eq!(updated["amount"].as_f64().unwrap(), 15.0);

    let delete = request(
        &app,
        Method::DELETE,
        &format!("/api/v1/expenses/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(delete.status(), 204);

    let list = request(&app, Method::GET, "/api/v1/expenses", Some(&token), None).await;
    assert!(response_json(list).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn deleting_foreign_or_unknown_expenses_is_a_noop() {
    let (app, _tmp) = build_test_app().await;
    let alice = register(&app, "alice", "password").await;
    let bob = register(&app, "bob", "password").await;

    let expense = create_expense(&app, &alice, "Food", 10.0).await;
    let id = expense["id"].as_str().unwrap();

    // Bob deleting Alice's expense succeeds as a no-op.
    let foreign_delete = request(
        &app,
        Method::DELETE,
        &format!("/api/v1/expenses/{id}"),
        Some(&bob),
        None,
    )
    .await;
    assert_eq!(foreign_delete.status(), 204);

    // Alice still has her record.
    let list = request(&app, Method::GET, "/api/v1/expenses", Some(&alice), None).await;
    assert_eq!(response_json(list).await.as_array().unwrap().len(), 1);

    // Unknown ids are also a no-op.
    let unknown_delete = request(
        &app,
        Method::DELETE,
        "/api/v1/expenses/no-such-id",
        Some(&alice),
        None,
    )
    .await;
    assert_eq!(unknown_delete.status(), 204);
}

#[tokio::test]
async fn updating_a_foreign_expense_is_not_found() {
    let (app, _tmp) = build_test_app().await;
    let alice = register(&app, "alice", "password").await;
    let bob = register(&app, "bob", "password").await;

    let expense = create_expense(&app, &alice, "Food", 10.0).await;
    let id = expense["id"].as_str().unwrap();

    let response = request(
        &app,
        Method::PUT,
        &format!("/api/v1/expenses/{id}"),
        Some(&bob),
        Some(json!({
            "category": "Hijacked",
            "amount": 1.0,
            "description": null,
            "date": "2025-06-16",
        })),
    )
    .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn reports_are_isolated_per_user() {
    let (app, _tmp) = build_test_app().await;
    let alice = register(&app, "alice", "password").await;
    let bob = register(&app, "bob", "password").await;

    create_budget(&app, &alice, "Food", 100.0).await;
    create_expense(&app, &alice, "Food", 40.0).await;
    create_expense(&app, &bob, "Food", 7.0).await;

    let response = request(
        &app,
        Method::GET,
        "/api/v1/spending/report",
        Some(&bob),
        None,
    )
    .await;
    let report = response_json(response).await;

    assert_eq!(report["total"].as_f64().unwrap(), 7.0);
    assert!(report["statuses"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn invalid_expense_payloads_are_rejected() {
    let (app, _tmp) = build_test_app().await;
    let token = register(&app, "alice", "password").await;

    let negative = request(
        &app,
        Method::POST,
        "/api/v1/expenses",
        Some(&token),
        Some(json!({ "category": "Food", "amount": -5.0, "date": "2025-06-15" })),
    )
    .await;
    assert_eq!(negative.status(), 422);

    let empty_category = request(
        &app,
        Method::POST,
        "/api/v1/expenses",
        Some(&token),
        Some(json!({ "category": "  ", "amount": 5.0, "date": "2025-06-15" })),
    )
    .await;
    assert_eq!(empty_category.status(), 422);
}

#[tokio::test]
async fn duplicate_budget_category_is_a_conflict() {
    let (app, _tmp) = build_test_app().await;
    let token = register(&app, "alice", "password").await;

    create_budget(&app, &token, "Food", 100.0).await;

    let duplicate = request(
        &app,
        Method::POST,
        "/api/v1/budgets",
        Some(&token),
        Some(json!({ "category": "Food", "limitAmount": 200.0 })),
    )
    .await;
    assert_eq!(duplicate.status(), 409);
}

#[tokio::test]
async fn budget_with_expenses_cannot_be_deleted() {
    let (app, _tmp) = build_test_app().await;
    let token = register(&app, "alice", "password").await;

    let budget = create_budget(&app, &token, "Food", 100.0).await;
    let budget_id = budget["id"].as_str().unwrap();
    let expense = create_expense(&app, &token, "Food", 10.0).await;
    let expense_id = expense["id"].as_str().unwrap();

    let blocked = request(
        &app,
        Method::DELETE,
        &format!("/api/v1/budgets/{budget_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(blocked.status(), 409);

    // Once the category is empty the budget can go.
    let delete_expense = request(
        &app,
        Method::DELETE,
        &format!("/api/v1/expenses/{expense_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(delete_expense.status(), 204);

    let delete_budget = request(
        &app,
        Method::DELETE,
        &format!("/api/v1/budgets/{budget_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(delete_budget.status(), 204);
}

#[tokio::test]
async fn statuses_follow_budget_insertion_order() {
    let (app, _tmp) = build_test_app().await;
    let token = register(&app, "alice", "password").await;

    create_budget(&app, &token, "Rent", 900.0).await;
    create_budget(&app, &token, "Food", 100.0).await;
    create_budget(&app, &token, "Fuel", 50.0).await;

    let response = request(
        &app,
        Method::GET,
        "/api/v1/spending/report",
        Some(&token),
        None,
    )
    .await;
    let report = response_json(response).await;
    let categories: Vec<&str> = report["statuses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["category"].as_str().unwrap())
        .collect();

    assert_eq!(categories, vec!["Rent", "Food", "Fuel"]);
}
