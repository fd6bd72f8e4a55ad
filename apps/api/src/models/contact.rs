use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactRow {
    pub id: Uuid,
    pub fullname: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// A validated submission, ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContact {
    pub fullname: String,
    pub email: String,
    pub message: String,
}
