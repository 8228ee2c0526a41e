use serde::Serialize;
use utoipa::ToSchema;

use crate::models::BenefitWithUsage;

#[derive(Serialize, ToSchema)]
pub struct BenefitsResponse {
    pub success: bool,
    pub benefits: Vec<BenefitWithUsage>,
}

impl BenefitsResponse {
    pub fn new(benefits: Vec<BenefitWithUsage>) -> Self {
        Self {
            success: true,
            benefits,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}
