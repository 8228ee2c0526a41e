use crate::models::{Benefit, BenefitWithUsage, StorageError, Venue};
use async_trait::async_trait;
use sqlx::SqlitePool;

const BENEFITS_WITH_USAGE_QUERY: &str = "
    SELECT
        b.id,
        b.name,
        EXISTS (
            SELECT 1 FROM user_benefits ub
            WHERE ub.benefit_id = b.id AND ub.user_id = ?
        ) AS used
    FROM benefits b
    WHERE b.venue_id = ?
    ORDER BY b.name COLLATE NOCASE ASC, b.name ASC, b.id ASC";

#[async_trait]
pub trait BenefitRepository: Send + Sync {
    /// Benefits of a venue sorted by name ignoring ASCII case, each flagged
    /// with the user's usage.
    async fn find_with_usage(&self, user_id: i64, venue_id: i64) -> Result<Vec<BenefitWithUsage>, StorageError>;
    async fn find_by_id(&self, benefit_id: i64) -> Result<Option<Benefit>, StorageError>;
    async fn find_venue(&self, venue_id: i64) -> Result<Option<Venue>, StorageError>;
}

pub struct SqliteBenefitRepository {
    pool: SqlitePool,
}

impl SqliteBenefitRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BenefitRepository for SqliteBenefitRepository {
    async fn find_with_usage(&self, user_id: i64, venue_id: i64) -> Result<Vec<BenefitWithUsage>, StorageError> {
        let benefits = sqlx::query_as::<_, BenefitWithUsage>(BENEFITS_WITH_USAGE_QUERY)
            .bind(user_id)
            .bind(venue_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(benefits)
    }

    async fn find_by_id(&self, benefit_id: i64) -> Result<Option<Benefit>, StorageError> {
        let benefit = sqlx::query_as::<_, Benefit>("SELECT id, name, venue_id FROM benefits WHERE id = ?")
            .bind(benefit_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(benefit)
    }

    async fn find_venue(&self, venue_id: i64) -> Result<Option<Venue>, StorageError> {
        let venue = sqlx::query_as::<_, Venue>("SELECT id, name FROM venues WHERE id = ?")
            .bind(venue_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(venue)
    }
}
