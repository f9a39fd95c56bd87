use serde::{Deserialize, Serialize};

/// Identifies a catalog product (e.g. "prod_001").
/// Also the element type of the browsing history and cart lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a new ProductId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identifies a session user. Fabricated by the mock identity provider;
/// there is no backing user store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_product_id_from_str() {
        let product_id = ProductId::new("prod_001");
        assert_eq!(product_id.as_str(), "prod_001");
    }

    #[test]
    fn should_display_product_id() {
        let product_id = ProductId::new("prod_042");
        assert_eq!(format!("{}", product_id), "prod_042");
    }

    #[test]
    fn should_compare_product_ids_for_equality() {
        assert_eq!(ProductId::new("prod_001"), ProductId::new("prod_001"));
        assert_ne!(ProductId::new("prod_001"), ProductId::new("prod_002"));
    }

    #[test]
    fn should_serialize_product_id_as_plain_string() {
        let json = serde_json::to_string(&ProductId::new("prod_007")).unwrap();
        assert_eq!(json, "\"prod_007\"");
    }

    #[test]
    fn should_create_user_id_from_string() {
        let user_id = UserId::new("mock-user-123".to_string());
        assert_eq!(user_id.as_str(), "mock-user-123");
    }

    #[test]
    fn should_convert_user_id_from_str() {
        let user_id: UserId = "from-str".into();
        assert_eq!(user_id.as_str(), "from-str");
    }
}
