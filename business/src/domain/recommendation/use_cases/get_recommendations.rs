use async_trait::async_trait;

use crate::domain::recommendation::model::Recommendations;
use crate::domain::shared::value_objects::ProductId;

pub struct GetRecommendationsParams {
    /// The caller's browsing history, most recent first. An empty history
    /// yields an empty ranking without a ranking call.
    pub history: Vec<ProductId>,
}

/// The recommendation orchestrator. Never fails: ranking errors degrade to
/// `Recommendations::Unavailable`.
#[async_trait]
pub trait GetRecommendationsUseCase: Send + Sync {
    async fn execute(&self, params: GetRecommendationsParams) -> Recommendations;
}
