use async_trait::async_trait;

use crate::domain::shared::value_objects::ProductId;

use super::errors::RecommendationError;
use super::model::RankingCandidate;

/// Service port for the external AI ranking service. Given the browsing history
/// and the candidate catalog, it returns an ordered list of recommended
/// product ids. The service is opaque and untrusted: returned ids may not
/// exist in the catalog and must be re-resolved by the caller.
#[async_trait]
pub trait RecommendationRankerService: Send + Sync {
    async fn rank(
        &self,
        history: &[ProductId],
        catalog: &[RankingCandidate],
    ) -> Result<Vec<ProductId>, RecommendationError>;
}
