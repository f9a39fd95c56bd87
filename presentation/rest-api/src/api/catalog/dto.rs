use poem_openapi::Object;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use business::domain::catalog::model::{Category, Product, ProductReview};

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductReviewResponse {
    pub id: String,
    /// Star rating, 0 to 5
    pub rating: Decimal,
    pub text: String,
    pub author: String,
    pub date: String,
}

impl From<ProductReview> for ProductReviewResponse {
    fn from(review: ProductReview) -> Self {
        Self {
            id: review.id,
            rating: review.rating,
            text: review.text,
            author: review.author,
            date: review.date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price in dollars
    pub price: Decimal,
    /// Category slug
    pub category: String,
    /// Ordered image asset identifiers
    pub images: Vec<String>,
    /// Average rating, 0 to 5
    pub rating: Decimal,
    pub reviews: Vec<ProductReviewResponse>,
    /// Units in stock
    pub stock: u32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.as_str().to_string(),
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            images: product.images,
            rating: product.rating,
            reviews: product.reviews.into_iter().map(Into::into).collect(),
            stock: product.stock,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    /// Filter key for product listings
    pub slug: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
        }
    }
}
