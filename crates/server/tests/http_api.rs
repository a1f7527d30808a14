use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use serde_json::{json, Value};
use tower::Service;

use models::saving_goal;
use service::errors::ServiceError;
use service::goal_service::GoalService;
use service::rates::ExchangeRateProvider;
use server::routes::{build_router, ServerState};

struct FixedRate(f64);

#[async_trait::async_trait]
impl ExchangeRateProvider for FixedRate {
    async fn latest_rate(&self, _symbol: &str) -> Result<f64, ServiceError> {
        Ok(self.0)
    }
}

struct FailingRate;

#[async_trait::async_trait]
impl ExchangeRateProvider for FailingRate {
    async fn latest_rate(&self, symbol: &str) -> Result<f64, ServiceError> {
        Err(ServiceError::RateFetch(format!("provider down for {symbol}")))
    }
}

fn app(db: DatabaseConnection, rates: Arc<dyn ExchangeRateProvider>) -> Router {
    let state = ServerState { goals: Arc::new(GoalService::new(db, rates)) };
    build_router(state, tower_http::cors::CorsLayer::very_permissive())
}

/// A connection whose every find for goals comes back empty.
fn empty_goal_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<saving_goal::Model>::new()])
        .into_connection()
}

fn goal_body(name: &str, currency: &str) -> Body {
    Body::from(
        serde_json::to_vec(&json!({
            "goal_name": name,
            "goal_currency": currency,
            "goal_value": 1000.0,
            "monthly_savings": 100.0,
        }))
        .unwrap(),
    )
}

async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), 64 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_with_unavailable_rate_is_400() -> anyhow::Result<()> {
    // The disconnected default connection proves the store is never reached:
    // any query would fail with a connection error, not a conversion one.
    let mut app = app(DatabaseConnection::default(), Arc::new(FailingRate));

    let req = Request::builder()
        .method("POST")
        .uri("/goals")
        .header("content-type", "application/json")
        .body(goal_body("Trip", "USD"))?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(resp).await,
        json!({ "message": "Could not fetch the exchange rate and convert the goal value." })
    );
    Ok(())
}

#[tokio::test]
async fn create_with_unknown_currency_is_rejected() -> anyhow::Result<()> {
    let mut app = app(DatabaseConnection::default(), Arc::new(FixedRate(5.0)));

    let req = Request::builder()
        .method("POST")
        .uri("/goals")
        .header("content-type", "application/json")
        .body(goal_body("Trip", "GBP"))?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn get_missing_goal_is_404() -> anyhow::Result<()> {
    let mut app = app(empty_goal_db(), Arc::new(FixedRate(5.0)));

    let req = Request::builder().uri("/goals/42").body(Body::empty())?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(resp).await,
        json!({ "message": "Saving goal with ID 42 not found." })
    );
    Ok(())
}

#[tokio::test]
async fn update_missing_goal_is_404() -> anyhow::Result<()> {
    // Conversion succeeds; the store lookup is what fails.
    let mut app = app(empty_goal_db(), Arc::new(FixedRate(5.0)));

    let req = Request::builder()
        .method("PUT")
        .uri("/goals/7")
        .header("content-type", "application/json")
        .body(goal_body("Trip", "USD"))?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(resp).await,
        json!({ "message": "Saving goal with ID 7 not found." })
    );
    Ok(())
}

#[tokio::test]
async fn update_with_unavailable_rate_is_400() -> anyhow::Result<()> {
    let mut app = app(DatabaseConnection::default(), Arc::new(FailingRate));

    let req = Request::builder()
        .method("PUT")
        .uri("/goals/7")
        .header("content-type", "application/json")
        .body(goal_body("Trip", "USD"))?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(resp).await,
        json!({ "message": "Could not fetch the exchange rate and convert the goal value." })
    );
    Ok(())
}

#[tokio::test]
async fn delete_missing_goal_is_404() -> anyhow::Result<()> {
    let mut app = app(empty_goal_db(), Arc::new(FixedRate(5.0)));

    let req = Request::builder()
        .method("DELETE")
        .uri("/goals/42")
        .body(Body::empty())?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(resp).await,
        json!({ "message": "Saving goal with ID 42 not found." })
    );
    Ok(())
}

#[tokio::test]
async fn empty_goal_list_is_200_with_empty_array() -> anyhow::Result<()> {
    let mut app = app(empty_goal_db(), Arc::new(FailingRate));

    let req = Request::builder().uri("/goals").body(Body::empty())?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, json!({ "saving_goals": [] }));
    Ok(())
}

#[tokio::test]
async fn convert_currency_success_payload() -> anyhow::Result<()> {
    let mut app = app(DatabaseConnection::default(), Arc::new(FixedRate(5.0)));

    let req = Request::builder()
        .uri("/convert-currency?amount=100.0&from_currency=USD&to_currency=BRL")
        .body(Body::empty())?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["from_currency"], "USD");
    assert_eq!(body["to_currency"], "BRL");
    assert_eq!(body["exchange_rate"], json!(5.0));
    assert_eq!(body["converted_amount"], json!(500.0));
    Ok(())
}

#[tokio::test]
async fn convert_currency_failure_is_500() -> anyhow::Result<()> {
    let mut app = app(DatabaseConnection::default(), Arc::new(FailingRate));

    let req = Request::builder()
        .uri("/convert-currency?amount=100.0&from_currency=USD&to_currency=BRL")
        .body(Body::empty())?;
    let resp = app.call(req).await?;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(resp).await;
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Error:"), "unexpected message: {message}");
    Ok(())
}

#[tokio::test]
async fn root_redirects_to_docs() -> anyhow::Result<()> {
    let mut app = app(DatabaseConnection::default(), Arc::new(FixedRate(5.0)));

    let req = Request::builder().uri("/").body(Body::empty())?;
    let resp = app.call(req).await?;
    assert!(resp.status().is_redirection());
    assert_eq!(resp.headers()["location"], "/swagger-ui");
    Ok(())
}
