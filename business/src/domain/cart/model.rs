use super::errors::CartError;
use crate::domain::shared::value_objects::ProductId;

/// A single cart line. Quantity is `u32`, so a line with quantity zero or
/// less never exists: zero requests remove the line instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(product_id: ProductId, quantity: u32) -> Result<Self, CartError> {
        if quantity == 0 {
            return Err(CartError::QuantityNotPositive);
        }
        Ok(Self {
            product_id,
            quantity,
        })
    }
}

/// The shopping cart: an insertion-ordered list of lines with unique
/// product ids.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructor for data already persisted in the session store
    /// (no validation).
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `quantity` of a product: increments an existing line, or appends
    /// a new one. A zero increment never creates a line.
    pub fn add(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => item.quantity += quantity,
            None => self.items.push(CartItem {
                product_id,
                quantity,
            }),
        }
    }

    /// Drops the matching line if present; no-op otherwise.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.items.retain(|i| i.product_id != *product_id);
    }

    /// Sets a line's quantity to exactly `quantity`. Zero removes the line.
    /// No-op when the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == *product_id) {
            item.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn prod(id: &str) -> ProductId {
        ProductId::new(id)
    }

    #[test]
    fn should_reject_cart_item_with_zero_quantity() {
        let result = CartItem::new(prod("prod_001"), 0);
        assert!(matches!(result.unwrap_err(), CartError::QuantityNotPositive));
    }

    #[test]
    fn should_append_new_line_on_first_add() {
        let mut cart = Cart::new();
        cart.add(prod("prod_001"), 1);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn should_increment_existing_line_on_repeated_add() {
        let mut cart = Cart::new();
        cart.add(prod("prod_001"), 1);
        cart.add(prod("prod_001"), 2);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn should_preserve_insertion_order() {
        let mut cart = Cart::new();
        cart.add(prod("prod_002"), 1);
        cart.add(prod("prod_001"), 1);
        cart.add(prod("prod_002"), 1);

        let ids: Vec<&str> = cart.items().iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["prod_002", "prod_001"]);
    }

    #[test]
    fn should_ignore_zero_quantity_add() {
        let mut cart = Cart::new();
        cart.add(prod("prod_001"), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn should_remove_matching_line() {
        let mut cart = Cart::new();
        cart.add(prod("prod_001"), 1);
        cart.add(prod("prod_002"), 1);
        cart.remove(&prod("prod_001"));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].product_id.as_str(), "prod_002");
    }

    #[test]
    fn should_noop_when_removing_absent_line() {
        let mut cart = Cart::new();
        cart.add(prod("prod_001"), 1);
        cart.remove(&prod("prod_999"));

        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn should_set_quantity_exactly_not_incrementally() {
        let mut cart = Cart::new();
        cart.add(prod("prod_001"), 5);
        cart.update_quantity(&prod("prod_001"), 2);

        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn should_remove_line_when_quantity_updated_to_zero() {
        let mut cart = Cart::new();
        cart.add(prod("prod_001"), 5);
        cart.update_quantity(&prod("prod_001"), 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn should_clear_all_lines() {
        let mut cart = Cart::new();
        cart.add(prod("prod_001"), 1);
        cart.add(prod("prod_002"), 3);
        cart.clear();

        assert!(cart.is_empty());
    }

    proptest! {
        /// For any sequence of adds of the same product, the final quantity
        /// is the sum of the added amounts.
        #[test]
        fn quantity_is_additive_over_repeated_adds(amounts in proptest::collection::vec(1u32..100, 1..20)) {
            let mut cart = Cart::new();
            for amount in &amounts {
                cart.add(ProductId::new("prod_001"), *amount);
            }

            prop_assert_eq!(cart.items().len(), 1);
            prop_assert_eq!(cart.items()[0].quantity, amounts.iter().sum::<u32>());
        }

        /// update_quantity(id, 0) leaves the cart in the same state as
        /// remove(id), for any cart containing the id.
        #[test]
        fn update_to_zero_equals_remove(others in proptest::collection::vec("[a-z]{4}", 0..5), qty in 1u32..50) {
            let mut updated = Cart::new();
            let mut removed = Cart::new();
            for other in &others {
                updated.add(ProductId::new(other.clone()), 1);
                removed.add(ProductId::new(other.clone()), 1);
            }
            updated.add(ProductId::new("prod_001"), qty);
            removed.add(ProductId::new("prod_001"), qty);

            updated.update_quantity(&ProductId::new("prod_001"), 0);
            removed.remove(&ProductId::new("prod_001"));

            prop_assert_eq!(updated.items(), removed.items());
        }
    }
}
