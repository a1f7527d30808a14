use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("duplicate name: {0}")]
    Duplicate(String),
    #[error("conversion failed: {0}")]
    Conversion(String),
    #[error("rate fetch failed: {0}")]
    RateFetch(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn goal_not_found(id: i32) -> Self {
        Self::NotFound(format!("saving goal with id {id}"))
    }
}
