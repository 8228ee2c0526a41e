use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::models::errors::{
    ServiceError, INVALID_LOOKUP_MESSAGE, MISSING_REDEMPTION_FIELDS_MESSAGE,
    NON_NUMERIC_REDEMPTION_MESSAGE,
};

/// Database entity representing a venue
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct Venue {
    pub id: i64,
    pub name: String,
}

/// Database entity representing a benefit offered by a venue
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct Benefit {
    pub id: i64,
    pub name: String,
    pub venue_id: i64,
}

/// A user having used a benefit. At most one per (user_id, benefit_id).
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct UsageRecord {
    pub id: i64,
    pub user_id: i64,
    pub benefit_id: i64,
    pub used_at: DateTime<Utc>,
}

/// A venue's benefit annotated with whether a given user has used it
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct BenefitWithUsage {
    pub id: i64,
    pub name: String,
    pub used: bool,
}

/// Benefits of the venue owning a just-redeemed benefit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedeemedBenefits {
    pub venue_id: i64,
    pub benefits: Vec<BenefitWithUsage>,
}

/// Result of the conflict-tolerant usage insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageOutcome {
    Created,
    AlreadyExists,
}

/// Validated input for listing a venue's benefits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenefitLookup {
    pub user_id: i64,
    pub venue_id: i64,
}

impl BenefitLookup {
    pub fn new(user_id: i64, venue_id: i64) -> Self {
        Self { user_id, venue_id }
    }

    pub fn parse(user_id: &str, venue_id: &str) -> Result<Self, ServiceError> {
        match (parse_id(user_id), parse_id(venue_id)) {
            (Some(user_id), Some(venue_id)) => Ok(Self { user_id, venue_id }),
            _ => Err(ServiceError::InvalidInput(INVALID_LOOKUP_MESSAGE.to_string())),
        }
    }
}

/// Validated input for marking a benefit as used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenefitRedemption {
    pub user_id: i64,
    pub benefit_id: i64,
}

impl BenefitRedemption {
    pub fn new(user_id: i64, benefit_id: i64) -> Self {
        Self { user_id, benefit_id }
    }

    /// Builds a redemption from the fields of a JSON request body.
    pub fn from_json(user_id: Option<&Value>, benefit_id: Option<&Value>) -> Result<Self, ServiceError> {
        let (user_id, benefit_id) = match (user_id, benefit_id) {
            (Some(user_id), Some(benefit_id)) if !user_id.is_null() && !benefit_id.is_null() => {
                (user_id, benefit_id)
            }
            _ => {
                return Err(ServiceError::InvalidInput(
                    MISSING_REDEMPTION_FIELDS_MESSAGE.to_string(),
                ))
            }
        };

        match (json_id(user_id), json_id(benefit_id)) {
            (Some(user_id), Some(benefit_id)) => Ok(Self { user_id, benefit_id }),
            _ => Err(ServiceError::InvalidInput(
                NON_NUMERIC_REDEMPTION_MESSAGE.to_string(),
            )),
        }
    }

    /// Builds a redemption from submitted form text.
    pub fn parse(user_id: &str, benefit_id: &str) -> Result<Self, ServiceError> {
        if user_id.trim().is_empty() || benefit_id.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                MISSING_REDEMPTION_FIELDS_MESSAGE.to_string(),
            ));
        }

        match (parse_id(user_id), parse_id(benefit_id)) {
            (Some(user_id), Some(benefit_id)) => Ok(Self { user_id, benefit_id }),
            _ => Err(ServiceError::InvalidInput(
                NON_NUMERIC_REDEMPTION_MESSAGE.to_string(),
            )),
        }
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// JSON numbers are ids when they are integral, so `5.0` reads as `5`.
fn json_id(value: &Value) -> Option<i64> {
    if let Some(id) = value.as_i64() {
        return Some(id);
    }

    let number = value.as_f64()?;
    let in_range = number >= i64::MIN as f64 && number < i64::MAX as f64;
    if number.fract() == 0.0 && in_range {
        Some(number as i64)
    } else {
        None
    }
}
