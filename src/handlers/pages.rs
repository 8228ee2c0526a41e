use actix_web::{http::header, web, HttpResponse, Result};
use askama::Template;

use crate::models::{
    BenefitLookup, BenefitRedemption, BenefitWithUsage, BenefitsPageQuery, RedeemPageForm,
    ServiceError,
};
use crate::services::BenefitService;

#[derive(Template)]
#[template(path = "benefits.html")]
struct BenefitsPage {
    user_id: String,
    venue_id: String,
    venue_name: Option<String>,
    benefits: Vec<BenefitWithUsage>,
    searched: bool,
    error: Option<String>,
}

impl BenefitsPage {
    fn empty(user_id: String, venue_id: String) -> Self {
        Self {
            user_id,
            venue_id,
            venue_name: None,
            benefits: Vec::new(),
            searched: false,
            error: None,
        }
    }
}

pub async fn benefits_page(
    benefit_service: web::Data<BenefitService>,
    query: web::Query<BenefitsPageQuery>,
) -> Result<HttpResponse, ServiceError> {
    let query = query.into_inner();
    let user_id = query.user_id.unwrap_or_default();
    let venue_id = query.venue_id.unwrap_or_default();
    let mut page = BenefitsPage::empty(user_id.trim().to_string(), venue_id.trim().to_string());

    // A blank form is not an error
    if !page.user_id.is_empty() || !page.venue_id.is_empty() {
        match BenefitLookup::parse(&page.user_id, &page.venue_id) {
            Ok(lookup) => match load_benefits(&benefit_service, lookup).await {
                Ok((venue_name, benefits)) => {
                    page.venue_name = venue_name;
                    page.benefits = benefits;
                    page.searched = true;
                }
                Err(err) => page.error = Some(err.public_message()),
            },
            Err(_) => {
                page.error = Some("Please enter valid numeric User ID and Venue ID.".to_string());
            }
        }
    }

    let html = page
        .render()
        .map_err(|e| ServiceError::Internal(format!("Failed to render benefits page: {}", e)))?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

async fn load_benefits(
    benefit_service: &BenefitService,
    lookup: BenefitLookup,
) -> Result<(Option<String>, Vec<BenefitWithUsage>), ServiceError> {
    let venue = benefit_service.venue(lookup.venue_id).await?;
    let benefits = benefit_service.fetch_benefits(lookup).await?;
    Ok((venue.map(|v| v.name), benefits))
}

pub async fn redeem_from_page(
    benefit_service: web::Data<BenefitService>,
    form: web::Form<RedeemPageForm>,
) -> Result<HttpResponse, ServiceError> {
    let redemption = BenefitRedemption::parse(&form.user_id, &form.benefit_id)?;

    let redeemed = benefit_service.redeem_benefit(redemption).await?;

    let location = format!("/?user_id={}&venue_id={}", redemption.user_id, redeemed.venue_id);
    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish())
}
