use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::history::use_cases::get_history::GetHistoryUseCase;
use business::domain::recommendation::model::Recommendations;
use business::domain::recommendation::use_cases::get_recommendations::{
    GetRecommendationsParams, GetRecommendationsUseCase,
};

use crate::api::recommendation::dto::RecommendationsResponse;
use crate::api::tags::ApiTags;

/// How many recommendations the storefront displays.
const DISPLAY_COUNT: usize = 4;

pub struct RecommendationApi {
    get_history_use_case: Arc<dyn GetHistoryUseCase>,
    get_recommendations_use_case: Arc<dyn GetRecommendationsUseCase>,
}

impl RecommendationApi {
    pub fn new(
        get_history_use_case: Arc<dyn GetHistoryUseCase>,
        get_recommendations_use_case: Arc<dyn GetRecommendationsUseCase>,
    ) -> Self {
        Self {
            get_history_use_case,
            get_recommendations_use_case,
        }
    }
}

/// Recommendations API
///
/// AI-ranked "just for you" products derived from the browsing history.
#[OpenApi]
impl RecommendationApi {
    /// Recommended products
    ///
    /// Empty with no message when there is no browsing history (the UI
    /// suppresses the section); empty with an informational message when the
    /// ranking could not be loaded.
    #[oai(path = "/recommendations", method = "get", tag = "ApiTags::Recommendations")]
    async fn get_recommendations(&self) -> Json<RecommendationsResponse> {
        let history = self.get_history_use_case.execute().await.unwrap_or_default();

        if history.is_empty() {
            return Json(RecommendationsResponse {
                products: vec![],
                message: None,
            });
        }

        let outcome = self
            .get_recommendations_use_case
            .execute(GetRecommendationsParams { history })
            .await;

        match outcome {
            Recommendations::Ranked(products) => Json(RecommendationsResponse {
                products: products
                    .into_iter()
                    .take(DISPLAY_COUNT)
                    .map(Into::into)
                    .collect(),
                message: None,
            }),
            Recommendations::Unavailable(_) => Json(RecommendationsResponse {
                products: vec![],
                message: Some("Could not load recommendations at this time.".to_string()),
            }),
            Recommendations::Superseded => Json(RecommendationsResponse {
                products: vec![],
                message: None,
            }),
        }
    }
}
