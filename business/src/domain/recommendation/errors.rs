#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("recommendation.catalog_unavailable")]
    CatalogUnavailable,
    #[error("recommendation.ranking_failed")]
    RankingFailed,
    #[error("recommendation.malformed_response")]
    MalformedResponse,
}
