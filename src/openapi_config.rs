use utoipa::openapi::{ContactBuilder, OpenApi as OpenApiSpec, Server};
use utoipa::OpenApi;

use crate::handlers;
use crate::models::{BenefitWithUsage, BenefitsResponse, ErrorResponse, RedeemBenefitForm};

#[derive(OpenApi)]
#[openapi(
    paths(handlers::benefits::get_benefits, handlers::benefits::use_benefit),
    components(schemas(BenefitWithUsage, BenefitsResponse, ErrorResponse, RedeemBenefitForm)),
    tags((name = "benefits", description = "Venue benefit lookup and redemption"))
)]
pub struct ApiDoc;

pub fn configure_openapi(mut openapi: OpenApiSpec, public_url: &str) -> OpenApiSpec {
    openapi.info.title = "Venue Benefits API".to_string();
    openapi.info.version = env!("CARGO_PKG_VERSION").to_string();
    openapi.info.contact = Some(ContactBuilder::new().name(Some("Venue Benefits")).build());

    // Swagger UI "Try it out" targets the address the server is bound to
    openapi.servers = Some(vec![Server::new(public_url)]);

    openapi
}
