use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePoolOptions, Sqlite, SqlitePool};

use crate::config::AppConfig;

pub async fn initialize_database(config: &AppConfig) -> Result<SqlitePool> {
    let database_url = config.database_url.as_str();

    // Create database file if it doesn't exist
    if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
        Sqlite::create_database(database_url).await?;
        tracing::info!("Created database {}", database_url);
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(database_url)
        .await?;

    run_migrations(&pool).await?;

    tracing::info!("Database initialized successfully");
    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
