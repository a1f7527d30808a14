//! Store operations for the `saving_goals` table. Each operation checks out
//! its own connection or transaction and releases it on every exit path.
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, Set, SqlErr,
    TransactionTrait,
};

use models::saving_goal::{self, Entity as SavingGoal};

use crate::errors::ServiceError;
use crate::goal_service::GoalInput;

fn db_err(e: DbErr) -> ServiceError {
    ServiceError::Db(e.to_string())
}

/// Unique violations get their own variant; everything else stays generic.
fn write_err(e: DbErr) -> ServiceError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => ServiceError::Duplicate(msg),
        _ => ServiceError::Db(e.to_string()),
    }
}

/// Insert a new goal with its precomputed BRL value. Rolls back and leaves
/// no row behind on any failure.
pub async fn create_goal(
    db: &DatabaseConnection,
    input: &GoalInput,
    converted_value: f64,
) -> Result<saving_goal::Model, ServiceError> {
    let txn = db.begin().await.map_err(db_err)?;

    let am = saving_goal::ActiveModel {
        goal_name: Set(input.goal_name.clone()),
        goal_currency: Set(input.goal_currency.to_string()),
        goal_value: Set(input.goal_value),
        monthly_savings: Set(input.monthly_savings),
        converted_value: Set(converted_value),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };

    match am.insert(&txn).await {
        Ok(model) => {
            txn.commit().await.map_err(db_err)?;
            Ok(model)
        }
        Err(e) => {
            txn.rollback().await.ok();
            Err(write_err(e))
        }
    }
}

/// All goals, store default ordering. An empty table is a normal result.
pub async fn list_goals(db: &DatabaseConnection) -> Result<Vec<saving_goal::Model>, ServiceError> {
    SavingGoal::find().all(db).await.map_err(db_err)
}

pub async fn get_goal(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<saving_goal::Model>, ServiceError> {
    SavingGoal::find_by_id(id).one(db).await.map_err(db_err)
}

/// Overwrite the five mutable columns of an existing goal.
pub async fn update_goal(
    db: &DatabaseConnection,
    id: i32,
    input: &GoalInput,
    converted_value: f64,
) -> Result<saving_goal::Model, ServiceError> {
    let txn = db.begin().await.map_err(db_err)?;

    let found = SavingGoal::find_by_id(id).one(&txn).await.map_err(db_err)?;
    let Some(model) = found else {
        txn.rollback().await.ok();
        return Err(ServiceError::goal_not_found(id));
    };

    let mut am: saving_goal::ActiveModel = model.into();
    am.goal_name = Set(input.goal_name.clone());
    am.goal_currency = Set(input.goal_currency.to_string());
    am.goal_value = Set(input.goal_value);
    am.monthly_savings = Set(input.monthly_savings);
    am.converted_value = Set(converted_value);

    match am.update(&txn).await {
        Ok(model) => {
            txn.commit().await.map_err(db_err)?;
            Ok(model)
        }
        Err(e) => {
            txn.rollback().await.ok();
            Err(write_err(e))
        }
    }
}

/// Delete by id. Returns whether a row existed.
pub async fn delete_goal(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await.map_err(db_err)?;

    let found = SavingGoal::find_by_id(id).one(&txn).await.map_err(db_err)?;
    let Some(model) = found else {
        txn.rollback().await.ok();
        return Ok(false);
    };

    match model.delete(&txn).await {
        Ok(_) => {
            txn.commit().await.map_err(db_err)?;
            Ok(true)
        }
        Err(e) => {
            txn.rollback().await.ok();
            Err(db_err(e))
        }
    }
}
