use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{error, info, warn};

use service::errors::ServiceError;
use service::goal_service::GoalInput;

use crate::errors::JsonApiError;
use crate::routes::ServerState;
use crate::schemas::{MessageResponse, SavingGoalView, SavingGoalsList};

fn create_error(e: ServiceError) -> JsonApiError {
    match e {
        ServiceError::Duplicate(detail) => {
            warn!(error = %detail, "duplicate goal name");
            JsonApiError::new(
                StatusCode::CONFLICT,
                "Saving goal with the same name already exists.",
            )
        }
        ServiceError::Conversion(detail) => {
            warn!(error = %detail, "conversion failed, goal not created");
            JsonApiError::new(
                StatusCode::BAD_REQUEST,
                "Could not fetch the exchange rate and convert the goal value.",
            )
        }
        e => {
            error!(error = %e, "saving goal create failed");
            JsonApiError::new(StatusCode::BAD_REQUEST, "Could not save the new saving goal.")
        }
    }
}

fn list_error(e: ServiceError) -> JsonApiError {
    error!(error = %e, "saving goal list failed");
    JsonApiError::new(StatusCode::BAD_REQUEST, "Error retrieving saving goals")
}

fn get_error(goal_id: i32, e: ServiceError) -> JsonApiError {
    match e {
        ServiceError::NotFound(_) => JsonApiError::new(
            StatusCode::NOT_FOUND,
            format!("Saving goal with ID {goal_id} not found."),
        ),
        e => {
            error!(goal_id, error = %e, "saving goal get failed");
            JsonApiError::new(
                StatusCode::BAD_REQUEST,
                format!("Error retrieving saving goal with ID {goal_id}."),
            )
        }
    }
}

fn update_error(goal_id: i32, e: ServiceError) -> JsonApiError {
    match e {
        ServiceError::NotFound(_) => JsonApiError::new(
            StatusCode::NOT_FOUND,
            format!("Saving goal with ID {goal_id} not found."),
        ),
        ServiceError::Conversion(detail) => {
            warn!(goal_id, error = %detail, "conversion failed, goal not updated");
            JsonApiError::new(
                StatusCode::BAD_REQUEST,
                "Could not fetch the exchange rate and convert the goal value.",
            )
        }
        e => {
            error!(goal_id, error = %e, "saving goal update failed");
            JsonApiError::new(
                StatusCode::BAD_REQUEST,
                format!("Could not update saving goal with ID {goal_id}."),
            )
        }
    }
}

fn delete_error(goal_id: i32, e: ServiceError) -> JsonApiError {
    match e {
        ServiceError::NotFound(_) => JsonApiError::new(
            StatusCode::NOT_FOUND,
            format!("Saving goal with ID {goal_id} not found."),
        ),
        e => {
            error!(goal_id, error = %e, "saving goal delete failed");
            JsonApiError::new(
                StatusCode::BAD_REQUEST,
                format!("Error deleting saving goal with ID {goal_id}."),
            )
        }
    }
}

#[utoipa::path(
    post, path = "/goals", tag = "goals",
    request_body = crate::openapi::SavingGoalInputDoc,
    responses(
        (status = 200, description = "Saving goal created", body = SavingGoalView),
        (status = 409, description = "Duplicate goal name", body = MessageResponse),
        (status = 400, description = "Conversion or persistence failure", body = MessageResponse)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<GoalInput>,
) -> Result<Json<SavingGoalView>, JsonApiError> {
    info!(goal_name = %input.goal_name, "saving goal create request");
    match state.goals.create(input).await {
        Ok(model) => Ok(Json(model.into())),
        Err(e) => Err(create_error(e)),
    }
}

#[utoipa::path(
    get, path = "/goals", tag = "goals",
    responses(
        (status = 200, description = "All saving goals", body = SavingGoalsList),
        (status = 400, description = "Retrieval failure", body = MessageResponse)
    )
)]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<SavingGoalsList>, JsonApiError> {
    match state.goals.list_all().await {
        Ok(goals) => Ok(Json(SavingGoalsList {
            saving_goals: goals.into_iter().map(SavingGoalView::from).collect(),
        })),
        Err(e) => Err(list_error(e)),
    }
}

#[utoipa::path(
    get, path = "/goals/{goal_id}", tag = "goals",
    params(("goal_id" = i32, Path, description = "Saving goal ID")),
    responses(
        (status = 200, description = "Saving goal found", body = SavingGoalView),
        (status = 404, description = "Not found", body = MessageResponse),
        (status = 400, description = "Retrieval failure", body = MessageResponse)
    )
)]
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(goal_id): Path<i32>,
) -> Result<Json<SavingGoalView>, JsonApiError> {
    match state.goals.get_by_id(goal_id).await {
        Ok(model) => Ok(Json(model.into())),
        Err(e) => Err(get_error(goal_id, e)),
    }
}

#[utoipa::path(
    put, path = "/goals/{goal_id}", tag = "goals",
    params(("goal_id" = i32, Path, description = "Saving goal ID")),
    request_body = crate::openapi::SavingGoalInputDoc,
    responses(
        (status = 200, description = "Saving goal updated", body = SavingGoalView),
        (status = 404, description = "Not found", body = MessageResponse),
        (status = 400, description = "Conversion or persistence failure", body = MessageResponse)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(goal_id): Path<i32>,
    Json(input): Json<GoalInput>,
) -> Result<Json<SavingGoalView>, JsonApiError> {
    info!(goal_id, goal_name = %input.goal_name, "saving goal update request");
    match state.goals.update_by_id(goal_id, input).await {
        Ok(model) => Ok(Json(model.into())),
        Err(e) => Err(update_error(goal_id, e)),
    }
}

#[utoipa::path(
    delete, path = "/goals/{goal_id}", tag = "goals",
    params(("goal_id" = i32, Path, description = "Saving goal ID")),
    responses(
        (status = 200, description = "Saving goal deleted", body = MessageResponse),
        (status = 404, description = "Not found", body = MessageResponse),
        (status = 400, description = "Deletion failure", body = MessageResponse)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(goal_id): Path<i32>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    info!(goal_id, "saving goal delete request");
    match state.goals.delete_by_id(goal_id).await {
        Ok(()) => Ok(Json(MessageResponse {
            message: format!("Saving goal with ID {goal_id} deleted successfully"),
        })),
        Err(e) => Err(delete_error(goal_id, e)),
    }
}
