use actix_web::{web, HttpResponse, Result};
use utoipa;

use crate::models::{
    BenefitLookup, BenefitRedemption, BenefitsResponse, RedeemBenefitForm, ServiceError,
};
use crate::services::BenefitService;

#[utoipa::path(
    get,
    path = "/api/benefits/{userid}/{venueid}",
    params(
        ("userid" = String, Path, description = "User ID, must be an integer"),
        ("venueid" = String, Path, description = "Venue ID, must be an integer")
    ),
    responses(
        (status = 200, description = "Benefits of the venue with the user's usage", body = BenefitsResponse),
        (status = 400, description = "Invalid user ID or venue ID", body = crate::models::ErrorResponse),
        (status = 500, description = "Failed to retrieve benefits", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_benefits(
    benefit_service: web::Data<BenefitService>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ServiceError> {
    let (user_id, venue_id) = path.into_inner();

    // Validation happens before any data-store access
    let lookup = BenefitLookup::parse(&user_id, &venue_id)?;

    let benefits = benefit_service.fetch_benefits(lookup).await?;

    Ok(HttpResponse::Ok().json(BenefitsResponse::new(benefits)))
}

#[utoipa::path(
    post,
    path = "/api/benefits/use",
    request_body = RedeemBenefitForm,
    responses(
        (status = 200, description = "Benefit marked as used; benefits of its venue", body = BenefitsResponse),
        (status = 400, description = "Missing or non-numeric userId / benefitId", body = crate::models::ErrorResponse),
        (status = 404, description = "Benefit not found", body = crate::models::ErrorResponse),
        (status = 500, description = "Unexpected server error", body = crate::models::ErrorResponse)
    )
)]
pub async fn use_benefit(
    benefit_service: web::Data<BenefitService>,
    form: web::Json<RedeemBenefitForm>,
) -> Result<HttpResponse, ServiceError> {
    let redemption = BenefitRedemption::from_json(form.user_id.as_ref(), form.benefit_id.as_ref())?;

    let redeemed = benefit_service.redeem_benefit(redemption).await?;

    Ok(HttpResponse::Ok().json(BenefitsResponse::new(redeemed.benefits)))
}
