use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::schemas::{ConversionView, MessageResponse, SavingGoalView, SavingGoalsList};

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct SavingGoalInputDoc {
    pub goal_name: String,
    /// One of USD, BRL, EUR, JPY, KRW.
    pub goal_currency: String,
    pub goal_value: f64,
    pub monthly_savings: f64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::goals::create,
        crate::goals::list,
        crate::goals::get_by_id,
        crate::goals::update,
        crate::goals::delete,
        crate::finance::convert_currency,
    ),
    components(
        schemas(
            HealthResponse,
            SavingGoalInputDoc,
            SavingGoalView,
            SavingGoalsList,
            MessageResponse,
            ConversionView,
        )
    ),
    tags(
        (name = "health"),
        (name = "goals", description = "Creation, retrieval, and management of saving goals"),
        (name = "finance", description = "Exchange-rate conversion helper")
    )
)]
pub struct ApiDoc;
