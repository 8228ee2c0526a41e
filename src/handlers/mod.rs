pub mod benefits;
pub mod pages;

// Re-export all handler functions for easy importing
pub use benefits::*;
pub use pages::*;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::models::ServiceError;

/// Registers every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/", web::get().to(benefits_page))
        .route("/redeem", web::post().to(redeem_from_page))
        .route("/api/benefits/use", web::post().to(use_benefit))
        .route("/api/benefits/{userid}/{venueid}", web::get().to(get_benefits));
}

/// Malformed JSON bodies get the same error shape as every other bad input.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!("Rejected request body: {}", err);
    ServiceError::InvalidInput(
        "Request body must be a JSON object with userId and benefitId.".to_string(),
    )
    .into()
}
