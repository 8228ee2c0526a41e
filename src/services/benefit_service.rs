use crate::models::{
    BenefitLookup, BenefitRedemption, BenefitWithUsage, RedeemedBenefits, ServiceError,
    UsageOutcome, Venue, BENEFIT_NOT_FOUND_MESSAGE,
};
use crate::repositories::{BenefitRepository, UsageRepository};
use chrono::Utc;
use std::sync::Arc;

pub struct BenefitService {
    benefit_repository: Arc<dyn BenefitRepository>,
    usage_repository: Arc<dyn UsageRepository>,
}

impl BenefitService {
    pub fn new(
        benefit_repository: Arc<dyn BenefitRepository>,
        usage_repository: Arc<dyn UsageRepository>,
    ) -> Self {
        Self {
            benefit_repository,
            usage_repository,
        }
    }

    pub async fn fetch_benefits(&self, lookup: BenefitLookup) -> Result<Vec<BenefitWithUsage>, ServiceError> {
        let benefits = self
            .benefit_repository
            .find_with_usage(lookup.user_id, lookup.venue_id)
            .await
            .map_err(ServiceError::retrieval)?;

        tracing::debug!(
            user_id = lookup.user_id,
            venue_id = lookup.venue_id,
            count = benefits.len(),
            "Fetched venue benefits"
        );

        Ok(benefits)
    }

    /// Marks a benefit as used, then returns the benefit list of its venue as
    /// currently stored. Redeeming twice is not an error.
    pub async fn redeem_benefit(&self, redemption: BenefitRedemption) -> Result<RedeemedBenefits, ServiceError> {
        let BenefitRedemption { user_id, benefit_id } = redemption;

        let benefit = self
            .benefit_repository
            .find_by_id(benefit_id)
            .await
            .map_err(ServiceError::operation)?
            .ok_or_else(|| ServiceError::NotFound(BENEFIT_NOT_FOUND_MESSAGE.to_string()))?;

        let outcome = self
            .usage_repository
            .record_usage(user_id, benefit_id, Utc::now())
            .await
            .map_err(ServiceError::operation)?;

        match outcome {
            UsageOutcome::Created => {
                tracing::info!("User {} successfully used benefit {}", user_id, benefit_id);
            }
            UsageOutcome::AlreadyExists => {
                tracing::info!(
                    "User {} had already used benefit {}, or attempted to use it concurrently",
                    user_id,
                    benefit_id
                );
            }
        }

        let benefits = self
            .benefit_repository
            .find_with_usage(user_id, benefit.venue_id)
            .await
            .map_err(ServiceError::operation)?;

        Ok(RedeemedBenefits {
            venue_id: benefit.venue_id,
            benefits,
        })
    }

    pub async fn venue(&self, venue_id: i64) -> Result<Option<Venue>, ServiceError> {
        self.benefit_repository
            .find_venue(venue_id)
            .await
            .map_err(ServiceError::retrieval)
    }
}
