use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One saving goal. `converted_value` is the goal value in BRL, snapshotted
/// at the last write; reads never recompute it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "saving_goals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub goal_name: String,
    pub goal_currency: String,
    pub goal_value: f64,
    pub monthly_savings: f64,
    pub converted_value: f64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
