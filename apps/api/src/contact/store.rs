//! Contact persistence behind a trait so the handler does not care whether
//! submissions land in Postgres or in memory.
//!
//! `AppState` holds an `Arc<dyn ContactStore>`, chosen at startup from config.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::contact::{ContactRow, NewContact};

#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn insert(&self, contact: NewContact) -> Result<ContactRow, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Postgres
// ────────────────────────────────────────────────────────────────────────────

pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn insert(&self, contact: NewContact) -> Result<ContactRow, AppError> {
        let row: ContactRow = sqlx::query_as(
            r#"
            INSERT INTO contacts (id, fullname, email, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id, fullname, email, message, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&contact.fullname)
        .bind(&contact.email)
        .bind(&contact.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory (local runs without DATABASE_URL, tests)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryContactStore {
    rows: Mutex<Vec<ContactRow>>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn all(&self) -> Vec<ContactRow> {
        self.rows.lock().await.clone()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn insert(&self, contact: NewContact) -> Result<ContactRow, AppError> {
        let row = ContactRow {
            id: Uuid::new_v4(),
            fullname: contact.fullname,
            email: contact.email,
            message: contact.message,
            created_at: Utc::now(),
        };
        self.rows.lock().await.push(row.clone());
        Ok(row)
    }
}
