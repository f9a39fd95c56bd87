#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.product_not_found")]
    NotFound,
    #[error("catalog.name_empty")]
    NameEmpty,
    #[error("catalog.price_negative")]
    PriceNegative,
    #[error("catalog.rating_out_of_range")]
    RatingOutOfRange,
    #[error("catalog.slug_empty")]
    SlugEmpty,
}
