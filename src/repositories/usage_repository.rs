use crate::models::{StorageError, UsageOutcome};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

#[async_trait]
pub trait UsageRepository: Send + Sync {
    /// Records that `user_id` used `benefit_id` unless a record already exists.
    /// An existing record, including its timestamp, is left untouched.
    async fn record_usage(
        &self,
        user_id: i64,
        benefit_id: i64,
        used_at: DateTime<Utc>,
    ) -> Result<UsageOutcome, StorageError>;
}

pub struct SqliteUsageRepository {
    pool: SqlitePool,
}

impl SqliteUsageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsageRepository for SqliteUsageRepository {
    async fn record_usage(
        &self,
        user_id: i64,
        benefit_id: i64,
        used_at: DateTime<Utc>,
    ) -> Result<UsageOutcome, StorageError> {
        // The UNIQUE(user_id, benefit_id) constraint serializes concurrent attempts.
        let result = sqlx::query(
            "INSERT INTO user_benefits (user_id, benefit_id, used_at) VALUES (?, ?, ?)
             ON CONFLICT (user_id, benefit_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(benefit_id)
        .bind(used_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() > 0 {
            Ok(UsageOutcome::Created)
        } else {
            Ok(UsageOutcome::AlreadyExists)
        }
    }
}
