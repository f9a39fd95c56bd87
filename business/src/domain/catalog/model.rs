use rust_decimal::Decimal;

use super::errors::CatalogError;
use crate::domain::shared::value_objects::ProductId;

/// A product category, filterable by its slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
}

impl Category {
    pub fn new(id: String, name: String, slug: String) -> Result<Self, CatalogError> {
        if slug.trim().is_empty() {
            return Err(CatalogError::SlugEmpty);
        }
        Ok(Self { id, name, slug })
    }
}

/// A customer review embedded in its product.
#[derive(Debug, Clone)]
pub struct ProductReview {
    pub id: String,
    pub rating: Decimal,
    pub text: String,
    pub author: String,
    pub date: String,
}

/// A catalog product. Immutable within a session; owned by the catalog store.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub images: Vec<String>,
    pub rating: Decimal,
    pub reviews: Vec<ProductReview>,
    pub stock: u32,
}

pub struct NewProductProps {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub images: Vec<String>,
    pub rating: Decimal,
    pub reviews: Vec<ProductReview>,
    pub stock: u32,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, CatalogError> {
        if props.name.trim().is_empty() {
            return Err(CatalogError::NameEmpty);
        }

        if props.price.is_sign_negative() {
            return Err(CatalogError::PriceNegative);
        }

        if props.rating.is_sign_negative() || props.rating > Decimal::from(5) {
            return Err(CatalogError::RatingOutOfRange);
        }

        Ok(Self {
            id: props.id,
            name: props.name,
            description: props.description,
            price: props.price,
            category: props.category,
            images: props.images,
            rating: props.rating,
            reviews: props.reviews,
            stock: props.stock,
        })
    }
}

/// Filter for catalog listings. `category` matches the category slug exactly;
/// `query` matches name or description, case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub category: Option<String>,
    pub query: Option<String>,
}

impl CatalogFilter {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category
            && product.category != *category
        {
            return false;
        }

        if let Some(query) = &self.query {
            let query = query.to_lowercase();
            let in_name = product.name.to_lowercase().contains(&query);
            let in_description = product.description.to_lowercase().contains(&query);
            if !in_name && !in_description {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product(name: &str, description: &str, category: &str) -> Product {
        Product::new(NewProductProps {
            id: ProductId::new("prod_001"),
            name: name.to_string(),
            description: description.to_string(),
            price: Decimal::new(149999, 2),
            category: category.to_string(),
            images: vec!["laptop-1".to_string()],
            rating: Decimal::new(48, 1),
            reviews: vec![],
            stock: 50,
        })
        .unwrap()
    }

    #[test]
    fn should_create_product_when_fields_valid() {
        let product = sample_product("Quantum-Core Laptop", "Next-generation laptop", "electronics");
        assert_eq!(product.id.as_str(), "prod_001");
        assert_eq!(product.price, Decimal::new(149999, 2));
    }

    #[test]
    fn should_reject_product_when_name_empty() {
        let result = Product::new(NewProductProps {
            id: ProductId::new("prod_001"),
            name: "   ".to_string(),
            description: "desc".to_string(),
            price: Decimal::ONE,
            category: "electronics".to_string(),
            images: vec![],
            rating: Decimal::ONE,
            reviews: vec![],
            stock: 1,
        });
        assert!(matches!(result.unwrap_err(), CatalogError::NameEmpty));
    }

    #[test]
    fn should_reject_product_when_price_negative() {
        let result = Product::new(NewProductProps {
            id: ProductId::new("prod_001"),
            name: "Laptop".to_string(),
            description: "desc".to_string(),
            price: Decimal::new(-1, 0),
            category: "electronics".to_string(),
            images: vec![],
            rating: Decimal::ONE,
            reviews: vec![],
            stock: 1,
        });
        assert!(matches!(result.unwrap_err(), CatalogError::PriceNegative));
    }

    #[test]
    fn should_reject_product_when_rating_above_five() {
        let result = Product::new(NewProductProps {
            id: ProductId::new("prod_001"),
            name: "Laptop".to_string(),
            description: "desc".to_string(),
            price: Decimal::ONE,
            category: "electronics".to_string(),
            images: vec![],
            rating: Decimal::new(51, 1),
            reviews: vec![],
            stock: 1,
        });
        assert!(matches!(result.unwrap_err(), CatalogError::RatingOutOfRange));
    }

    #[test]
    fn should_reject_category_when_slug_empty() {
        let result = Category::new("1".to_string(), "Electronics".to_string(), "".to_string());
        assert!(matches!(result.unwrap_err(), CatalogError::SlugEmpty));
    }

    #[test]
    fn should_match_everything_with_empty_filter() {
        let product = sample_product("Laptop", "A fast laptop", "electronics");
        assert!(CatalogFilter::none().matches(&product));
    }

    #[test]
    fn should_filter_by_category_slug() {
        let product = sample_product("Laptop", "A fast laptop", "electronics");
        let matching = CatalogFilter {
            category: Some("electronics".to_string()),
            query: None,
        };
        let other = CatalogFilter {
            category: Some("fashion".to_string()),
            query: None,
        };
        assert!(matching.matches(&product));
        assert!(!other.matches(&product));
    }

    #[test]
    fn should_match_query_case_insensitively_on_name_and_description() {
        let product = sample_product("SonicStream Headphones", "Noise-cancelling audio", "electronics");
        let by_name = CatalogFilter {
            category: None,
            query: Some("sonicstream".to_string()),
        };
        let by_description = CatalogFilter {
            category: None,
            query: Some("NOISE".to_string()),
        };
        let no_match = CatalogFilter {
            category: None,
            query: Some("keyboard".to_string()),
        };
        assert!(by_name.matches(&product));
        assert!(by_description.matches(&product));
        assert!(!no_match.matches(&product));
    }
}
