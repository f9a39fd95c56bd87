use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use futures::future::join_all;

use crate::domain::catalog::model::CatalogFilter;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::logger::Logger;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::{RankingCandidate, Recommendations};
use crate::domain::recommendation::services::RecommendationRankerService;
use crate::domain::recommendation::use_cases::get_recommendations::{
    GetRecommendationsParams, GetRecommendationsUseCase,
};

/// Orchestrates a recommendation fetch: catalog + history in, ranked
/// products out. Each invocation is a fresh ranking call keyed on the full
/// current history; there is no caching, retry, or rate limiting.
pub struct GetRecommendationsUseCaseImpl {
    pub catalog_repository: Arc<dyn CatalogRepository>,
    pub ranker: Arc<dyn RecommendationRankerService>,
    pub logger: Arc<dyn Logger>,
    /// Fetch generation. A response whose generation is no longer current is
    /// reported as superseded so stale results never overwrite fresh ones.
    generation: AtomicU64,
}

impl GetRecommendationsUseCaseImpl {
    pub fn new(
        catalog_repository: Arc<dyn CatalogRepository>,
        ranker: Arc<dyn RecommendationRankerService>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            catalog_repository,
            ranker,
            logger,
            generation: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl GetRecommendationsUseCase for GetRecommendationsUseCaseImpl {
    async fn execute(&self, params: GetRecommendationsParams) -> Recommendations {
        if params.history.is_empty() {
            return Recommendations::Ranked(vec![]);
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let products = match self
            .catalog_repository
            .get_all(&CatalogFilter::none())
            .await
        {
            Ok(products) => products,
            Err(err) => {
                self.logger
                    .error(&format!("Catalog load failed for recommendations: {err}"));
                return Recommendations::Unavailable(RecommendationError::CatalogUnavailable);
            }
        };

        let candidates: Vec<RankingCandidate> =
            products.iter().map(RankingCandidate::from_product).collect();

        let ranked_ids = match self.ranker.rank(&params.history, &candidates).await {
            Ok(ids) => ids,
            Err(err) => {
                self.logger
                    .error(&format!("Recommendation ranking failed: {err}"));
                return Recommendations::Unavailable(err);
            }
        };

        // Resolve every returned id back to a full product, concurrently.
        // Ids the ranker hallucinated resolve to NotFound and are dropped.
        let resolutions = join_all(
            ranked_ids
                .iter()
                .map(|id| self.catalog_repository.get_by_id(id)),
        )
        .await;

        let recommended: Vec<_> = resolutions.into_iter().filter_map(Result::ok).collect();

        if self.generation.load(Ordering::SeqCst) != generation {
            self.logger.debug("Discarding superseded recommendation fetch");
            return Recommendations::Superseded;
        }

        self.logger.info(&format!(
            "Resolved {} of {} recommended products",
            recommended.len(),
            ranked_ids.len()
        ));

        Recommendations::Ranked(recommended)
    }
}
