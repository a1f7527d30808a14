use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::error;

use models::currency::Currency;

use crate::errors::JsonApiError;
use crate::routes::ServerState;
use crate::schemas::ConversionView;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ConversionQuery {
    pub amount: f64,
    #[param(value_type = String)]
    pub from_currency: Currency,
    #[param(value_type = String)]
    pub to_currency: Currency,
}

#[utoipa::path(
    get, path = "/convert-currency", tag = "finance",
    params(ConversionQuery),
    responses(
        (status = 200, description = "Conversion successful", body = ConversionView),
        (status = 500, description = "Exchange rate unavailable", body = crate::schemas::MessageResponse)
    )
)]
pub async fn convert_currency(
    State(state): State<ServerState>,
    Query(q): Query<ConversionQuery>,
) -> Result<Json<ConversionView>, JsonApiError> {
    match state.goals.convert_amount(q.amount, q.from_currency, q.to_currency).await {
        Ok(conv) => Ok(Json(ConversionView {
            amount: q.amount,
            from_currency: q.from_currency.to_string(),
            to_currency: q.to_currency.to_string(),
            exchange_rate: conv.exchange_rate,
            converted_amount: conv.converted_amount,
        })),
        Err(e) => {
            error!(from = %q.from_currency, to = %q.to_currency, error = %e, "currency conversion failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {e}")))
        }
    }
}
