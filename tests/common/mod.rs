use actix_web::{web, App};
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::sync::Arc;
use tempfile::TempDir;
use venue_benefits::{
    database::run_migrations,
    handlers,
    models::UsageRecord,
    repositories::{SqliteBenefitRepository, SqliteUsageRepository},
    services::BenefitService,
};

pub struct TestApp {
    pub pool: SqlitePool,
    #[allow(dead_code)]
    pub temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_pool_size(1).await
    }

    /// Database whose pool holds up to `max_connections` connections, so
    /// statements from different tasks can run at the same time.
    pub async fn with_pool_size(max_connections: u32) -> Self {
        // Create temporary database
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let database_url = format!("sqlite://{}?mode=rwc", db_path.display());

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(&database_url)
            .await
            .expect("Failed to create database pool");

        run_migrations(&pool).await.expect("Failed to run migrations");

        Self { pool, temp_dir }
    }

    /// Venue 1 "Harbour Club" offers Valet (11) and Free Coffee (10),
    /// venue 2 "Skyline Hotel" offers Late Checkout (20). User 5 has used Free Coffee.
    pub async fn with_scenario() -> Self {
        let app = Self::new().await;
        app.seed_scenario().await;
        app
    }

    #[allow(dead_code)]
    pub async fn with_scenario_and_pool_size(max_connections: u32) -> Self {
        let app = Self::with_pool_size(max_connections).await;
        app.seed_scenario().await;
        app
    }

    async fn seed_scenario(&self) {
        self.seed_venue(1, "Harbour Club").await;
        self.seed_venue(2, "Skyline Hotel").await;
        self.seed_benefit(11, "Valet", 1).await;
        self.seed_benefit(10, "Free Coffee", 1).await;
        self.seed_benefit(20, "Late Checkout", 2).await;
        self.seed_usage(5, 10, Utc::now()).await;
    }

    pub fn benefit_service(&self) -> BenefitService {
        let benefit_repository = Arc::new(SqliteBenefitRepository::new(self.pool.clone()));
        let usage_repository = Arc::new(SqliteUsageRepository::new(self.pool.clone()));
        BenefitService::new(benefit_repository, usage_repository)
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.benefit_service()))
            .configure(handlers::configure)
    }

    pub async fn seed_venue(&self, id: i64, name: &str) {
        sqlx::query("INSERT INTO venues (id, name) VALUES (?, ?)")
            .bind(id)
            .bind(name)
            .execute(&self.pool)
            .await
            .expect("Failed to seed venue");
    }

    pub async fn seed_benefit(&self, id: i64, name: &str, venue_id: i64) {
        sqlx::query("INSERT INTO benefits (id, name, venue_id) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(venue_id)
            .execute(&self.pool)
            .await
            .expect("Failed to seed benefit");
    }

    pub async fn seed_usage(&self, user_id: i64, benefit_id: i64, used_at: DateTime<Utc>) {
        sqlx::query("INSERT INTO user_benefits (user_id, benefit_id, used_at) VALUES (?, ?, ?)")
            .bind(user_id)
            .bind(benefit_id)
            .bind(used_at)
            .execute(&self.pool)
            .await
            .expect("Failed to seed usage");
    }

    #[allow(dead_code)]
    pub async fn usage_records(&self, user_id: i64, benefit_id: i64) -> Vec<UsageRecord> {
        sqlx::query_as::<_, UsageRecord>(
            "SELECT id, user_id, benefit_id, used_at FROM user_benefits WHERE user_id = ? AND benefit_id = ?",
        )
        .bind(user_id)
        .bind(benefit_id)
        .fetch_all(&self.pool)
        .await
        .expect("Failed to fetch usage records")
    }

    #[allow(dead_code)]
    pub async fn usage_count(&self) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM user_benefits")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count usage records")
    }
}
