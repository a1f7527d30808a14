use serde::Serialize;
use utoipa::ToSchema;

use models::saving_goal;

/// Full representation of a stored goal. `created_at` is rendered as
/// `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SavingGoalView {
    pub id: i32,
    pub goal_name: String,
    pub goal_currency: String,
    pub goal_value: f64,
    pub monthly_savings: f64,
    pub converted_value: f64,
    pub created_at: String,
}

impl From<saving_goal::Model> for SavingGoalView {
    fn from(m: saving_goal::Model) -> Self {
        Self {
            id: m.id,
            goal_name: m.goal_name,
            goal_currency: m.goal_currency,
            goal_value: m.goal_value,
            monthly_savings: m.monthly_savings,
            converted_value: m.converted_value,
            created_at: m.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SavingGoalsList {
    pub saving_goals: Vec<SavingGoalView>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConversionView {
    pub amount: f64,
    pub from_currency: String,
    pub to_currency: String,
    pub exchange_rate: f64,
    pub converted_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn created_at_renders_without_offset() {
        let created = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 1, 13, 45, 0)
            .unwrap();
        let view = SavingGoalView::from(saving_goal::Model {
            id: 7,
            goal_name: "Trip".into(),
            goal_currency: "USD".into(),
            goal_value: 1000.0,
            monthly_savings: 100.0,
            converted_value: 5000.0,
            created_at: created,
        });
        assert_eq!(view.created_at, "2024-05-01 13:45:00");

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["converted_value"], 5000.0);
        assert_eq!(json["created_at"], "2024-05-01 13:45:00");
    }
}
