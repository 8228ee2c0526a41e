use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

/// JSON body of `POST /api/benefits/use`.
///
/// Fields stay loosely typed so a missing field and a wrongly typed field
/// can be reported separately; see `BenefitRedemption::from_json`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RedeemBenefitForm {
    #[serde(rename = "userId")]
    #[schema(value_type = i64, example = 5)]
    pub user_id: Option<Value>,
    #[serde(rename = "benefitId")]
    #[schema(value_type = i64, example = 11)]
    pub benefit_id: Option<Value>,
}

/// Query string of the benefits page
#[derive(Debug, Default, Deserialize)]
pub struct BenefitsPageQuery {
    pub user_id: Option<String>,
    pub venue_id: Option<String>,
}

/// Form posted by the "Use" button on the benefits page
#[derive(Debug, Deserialize)]
pub struct RedeemPageForm {
    pub user_id: String,
    pub benefit_id: String,
}
