use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use models::currency::Currency;
use models::saving_goal;

use crate::db::goal_store;
use crate::errors::ServiceError;
use crate::rates::{self, ExchangeRateProvider};

/// Payload for creating or fully replacing a goal. Currency is typed, so an
/// unknown code never reaches this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalInput {
    pub goal_name: String,
    pub goal_currency: Currency,
    pub goal_value: f64,
    pub monthly_savings: f64,
}

/// Result of a free-form amount conversion (`/convert-currency`).
#[derive(Debug, Clone, Copy)]
pub struct AmountConversion {
    pub exchange_rate: f64,
    pub converted_amount: f64,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Orchestrates conversion and persistence for saving goals. Stateless across
/// calls; every operation runs its own store transaction.
pub struct GoalService {
    db: DatabaseConnection,
    rates: Arc<dyn ExchangeRateProvider>,
}

impl GoalService {
    pub fn new(db: DatabaseConnection, rates: Arc<dyn ExchangeRateProvider>) -> Self {
        Self { db, rates }
    }

    /// Goal value in BRL. BRL goals pass through unchanged; anything else
    /// fetches the current rate. A failed fetch is terminal for the caller,
    /// nothing propagates past the `Conversion` error.
    pub async fn convert_to_brl(&self, input: &GoalInput) -> Result<f64, ServiceError> {
        if input.goal_currency.is_brl() {
            return Ok(input.goal_value);
        }
        let symbol = rates::pair(input.goal_currency, Currency::Brl);
        match self.rates.latest_rate(&symbol).await {
            Ok(rate) => Ok(round2(input.goal_value * rate)),
            Err(e) => {
                error!(%symbol, error = %e, "could not fetch the exchange rate");
                Err(ServiceError::Conversion(e.to_string()))
            }
        }
    }

    /// Convert first, persist second: a failed conversion never touches the
    /// store.
    pub async fn create(&self, input: GoalInput) -> Result<saving_goal::Model, ServiceError> {
        info!(goal_name = %input.goal_name, "adding saving goal");
        let converted_value = self.convert_to_brl(&input).await?;
        let model = goal_store::create_goal(&self.db, &input, converted_value).await?;
        info!(id = model.id, "saving goal added");
        Ok(model)
    }

    pub async fn list_all(&self) -> Result<Vec<saving_goal::Model>, ServiceError> {
        let goals = goal_store::list_goals(&self.db).await?;
        info!(count = goals.len(), "saving goals retrieved");
        Ok(goals)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<saving_goal::Model, ServiceError> {
        match goal_store::get_goal(&self.db, id).await? {
            Some(model) => Ok(model),
            None => {
                warn!(id, "saving goal not found");
                Err(ServiceError::goal_not_found(id))
            }
        }
    }

    /// Always re-converts, even when the currency is unchanged, so the BRL
    /// snapshot reflects the rate at update time.
    pub async fn update_by_id(
        &self,
        id: i32,
        input: GoalInput,
    ) -> Result<saving_goal::Model, ServiceError> {
        info!(id, goal_name = %input.goal_name, "updating saving goal");
        let converted_value = self.convert_to_brl(&input).await?;
        let model = goal_store::update_goal(&self.db, id, &input, converted_value).await?;
        info!(id, "saving goal updated");
        Ok(model)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        if goal_store::delete_goal(&self.db, id).await? {
            info!(id, "saving goal deleted");
            Ok(())
        } else {
            warn!(id, "saving goal not found");
            Err(ServiceError::goal_not_found(id))
        }
    }

    /// Free-form conversion between two currencies of the supported set.
    /// No rounding here; callers see the raw product.
    pub async fn convert_amount(
        &self,
        amount: f64,
        from: Currency,
        to: Currency,
    ) -> Result<AmountConversion, ServiceError> {
        let symbol = rates::pair(from, to);
        let exchange_rate = self.rates.latest_rate(&symbol).await?;
        Ok(AmountConversion { exchange_rate, converted_amount: amount * exchange_rate })
    }
}
