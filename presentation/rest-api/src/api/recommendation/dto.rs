use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::api::catalog::dto::ProductResponse;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RecommendationsResponse {
    /// Recommended products, best match first; empty when there is no
    /// browsing history or nothing could be recommended
    pub products: Vec<ProductResponse>,
    /// Informational notice when recommendations could not be loaded
    #[oai(skip_serializing_if_is_none)]
    pub message: Option<String>,
}
