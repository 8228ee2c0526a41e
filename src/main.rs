use actix_cors::Cors;
use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

use venue_benefits::config::AppConfig;
use venue_benefits::database::initialize_database;
use venue_benefits::handlers;
use venue_benefits::openapi_config::{configure_openapi, ApiDoc};
use venue_benefits::repositories::{SqliteBenefitRepository, SqliteUsageRepository};
use venue_benefits::services::BenefitService;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,venue_benefits=debug")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // Initialize database
    let pool = initialize_database(&config).await?;

    // Initialize repositories
    let benefit_repository = Arc::new(SqliteBenefitRepository::new(pool.clone()));
    let usage_repository = Arc::new(SqliteUsageRepository::new(pool));

    // Initialize services with dependency injection
    let benefit_service = web::Data::new(BenefitService::new(benefit_repository, usage_repository));

    let public_url = format!("http://localhost:{}", config.bind_address.port());
    tracing::info!("Venue Benefits server listening on {}", config.bind_address);
    tracing::info!("API Documentation: {}/swagger-ui/", public_url);

    let openapi_spec = configure_openapi(ApiDoc::openapi(), &public_url);

    HttpServer::new(move || {
        App::new()
            .app_data(benefit_service.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .wrap(Logger::default())
            // Swagger UI for API documentation
            .service(
                utoipa_swagger_ui::SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi_spec.clone()),
            )
            .service(Files::new("/static", "./static"))
            .configure(handlers::configure)
    })
    .bind(config.bind_address)?
    .run()
    .await?;

    Ok(())
}
