use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::goal_service::GoalService;

use crate::{finance, goals, openapi::ApiDoc};

#[derive(Clone)]
pub struct ServerState {
    pub goals: Arc<GoalService>,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service healthy"))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// The root redirects to the interactive API documentation.
async fn docs_redirect() -> Redirect {
    Redirect::to("/swagger-ui")
}

/// Build the full application router: goal CRUD, conversion helper, docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/", get(docs_redirect))
        .route("/health", get(health))
        .route("/goals", post(goals::create).get(goals::list))
        .route(
            "/goals/:goal_id",
            get(goals::get_by_id).put(goals::update).delete(goals::delete),
        )
        .route("/convert-currency", get(finance::convert_currency))
        .with_state(state);

    api.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
