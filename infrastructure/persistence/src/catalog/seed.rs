use rust_decimal::Decimal;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::{Category, NewProductProps, Product, ProductReview};
use business::domain::shared::value_objects::ProductId;

/// The demo categories.
pub fn categories() -> Result<Vec<Category>, CatalogError> {
    Ok(vec![
        Category::new("1".to_string(), "Electronics".to_string(), "electronics".to_string())?,
        Category::new("2".to_string(), "Fashion".to_string(), "fashion".to_string())?,
        Category::new("3".to_string(), "Home Goods".to_string(), "home-goods".to_string())?,
    ])
}

/// The demo catalog. Static per session; prices in dollars with two decimal
/// places.
pub fn products() -> Result<Vec<Product>, CatalogError> {
    Ok(vec![
        Product::new(NewProductProps {
            id: ProductId::new("prod_001"),
            name: "Quantum-Core Laptop".to_string(),
            description: "Next-generation laptop with a quantum processor, 16-inch OLED display, \
                          and all-day battery life. Perfect for professionals and creators."
                .to_string(),
            price: Decimal::new(149999, 2),
            category: "electronics".to_string(),
            images: vec!["laptop-1".to_string(), "laptop-2".to_string()],
            rating: Decimal::new(48, 1),
            reviews: vec![
                ProductReview {
                    id: "rev_001".to_string(),
                    rating: Decimal::from(5),
                    text: "Incredibly fast and the display is stunning!".to_string(),
                    author: "TechGuru".to_string(),
                    date: "2023-10-15".to_string(),
                },
                ProductReview {
                    id: "rev_002".to_string(),
                    rating: Decimal::from(4),
                    text: "Great performance, but a bit pricey.".to_string(),
                    author: "Jane D.".to_string(),
                    date: "2023-10-20".to_string(),
                },
            ],
            stock: 50,
        })?,
        Product::new(NewProductProps {
            id: ProductId::new("prod_002"),
            name: "SonicStream Wireless Headphones".to_string(),
            description: "Immerse yourself in high-fidelity audio with these noise-cancelling \
                          wireless headphones. 30-hour playback and crystal-clear microphone."
                .to_string(),
            price: Decimal::new(24999, 2),
            category: "electronics".to_string(),
            images: vec!["headphones-1".to_string(), "headphones-2".to_string()],
            rating: Decimal::new(47, 1),
            reviews: vec![ProductReview {
                id: "rev_003".to_string(),
                rating: Decimal::from(5),
                text: "Best noise cancellation I have ever experienced.".to_string(),
                author: "AudioPhile".to_string(),
                date: "2023-11-01".to_string(),
            }],
            stock: 120,
        })?,
        Product::new(NewProductProps {
            id: ProductId::new("prod_003"),
            name: "Urban Explorer Jacket".to_string(),
            description: "A stylish and durable waterproof jacket designed for the modern \
                          adventurer. Features multiple pockets and a breathable inner lining."
                .to_string(),
            price: Decimal::new(18999, 2),
            category: "fashion".to_string(),
            images: vec!["jacket-1".to_string(), "jacket-2".to_string()],
            rating: Decimal::new(45, 1),
            reviews: vec![],
            stock: 80,
        })?,
        Product::new(NewProductProps {
            id: ProductId::new("prod_004"),
            name: "Classic Leather Watch".to_string(),
            description: "A timeless analog watch with a genuine leather strap and stainless \
                          steel case. Minimalist design suitable for any occasion."
                .to_string(),
            price: Decimal::new(15999, 2),
            category: "fashion".to_string(),
            images: vec!["watch-1".to_string(), "watch-2".to_string()],
            rating: Decimal::new(49, 1),
            reviews: vec![],
            stock: 200,
        })?,
        Product::new(NewProductProps {
            id: ProductId::new("prod_005"),
            name: "AeroPress Coffee Maker".to_string(),
            description: "The revolutionary coffee press that brews smooth, rich coffee without \
                          bitterness. Fast, easy to clean, and portable."
                .to_string(),
            price: Decimal::new(3999, 2),
            category: "home-goods".to_string(),
            images: vec!["coffee-maker-1".to_string(), "coffee-maker-2".to_string()],
            rating: Decimal::new(49, 1),
            reviews: vec![],
            stock: 300,
        })?,
        Product::new(NewProductProps {
            id: ProductId::new("prod_006"),
            name: "ErgoComfort Office Chair".to_string(),
            description: "Ergonomic office chair with adjustable lumbar support, armrests, and \
                          seat height. Promotes healthy posture for long work hours."
                .to_string(),
            price: Decimal::new(34999, 2),
            category: "home-goods".to_string(),
            images: vec!["chair-1".to_string(), "chair-2".to_string()],
            rating: Decimal::new(46, 1),
            reviews: vec![],
            stock: 40,
        })?,
        Product::new(NewProductProps {
            id: ProductId::new("prod_007"),
            name: "4K Ultra HD Smart TV".to_string(),
            description: "55-inch Smart TV with vibrant 4K resolution, HDR support, and built-in \
                          streaming apps. An immersive cinematic experience at home."
                .to_string(),
            price: Decimal::new(59999, 2),
            category: "electronics".to_string(),
            images: vec!["tv-1".to_string(), "tv-2".to_string()],
            rating: Decimal::new(47, 1),
            reviews: vec![],
            stock: 60,
        })?,
        Product::new(NewProductProps {
            id: ProductId::new("prod_008"),
            name: "TrailBlazer Hiking Boots".to_string(),
            description: "Waterproof and breathable hiking boots for all terrains. Provides \
                          excellent ankle support and grip for your next adventure."
                .to_string(),
            price: Decimal::new(13999, 2),
            category: "fashion".to_string(),
            images: vec!["boots-1".to_string(), "boots-2".to_string()],
            rating: Decimal::new(48, 1),
            reviews: vec![],
            stock: 150,
        })?,
    ])
}
