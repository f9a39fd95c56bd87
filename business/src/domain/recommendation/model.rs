use crate::domain::catalog::model::Product;
use crate::domain::shared::value_objects::ProductId;

use super::errors::RecommendationError;

/// One catalog entry as presented to the ranking service: just the id and the
/// description it ranks on.
#[derive(Debug, Clone)]
pub struct RankingCandidate {
    pub product_id: ProductId,
    pub description: String,
}

impl RankingCandidate {
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            description: product.description.clone(),
        }
    }
}

/// Outcome of a recommendation fetch. Degradation is a value here, not an
/// error: callers can tell "nothing to recommend" from "the ranking call failed"
/// from "a newer fetch superseded this one".
#[derive(Debug)]
pub enum Recommendations {
    /// Ordered products resolved from the ranking; may be empty.
    Ranked(Vec<Product>),
    /// The ranking call or catalog load failed; the UI may show an
    /// informational "could not load recommendations" state.
    Unavailable(RecommendationError),
    /// A newer fetch started while this one was in flight; discard.
    Superseded,
}

impl Recommendations {
    pub fn is_ranked(&self) -> bool {
        matches!(self, Recommendations::Ranked(_))
    }
}
