use uuid::Uuid;

use super::errors::AuthError;
use crate::domain::shared::value_objects::UserId;

/// The session user. At most one instance is current per session; fabricated
/// by the identity provider on login/signup, destroyed on logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
}

impl User {
    /// Fabricates a fresh user for the mocked identity provider. There is no
    /// uniqueness or credential check against a backing store.
    pub fn mock(email: String, name: String) -> Result<Self, AuthError> {
        if email.trim().is_empty() {
            return Err(AuthError::EmailEmpty);
        }

        Ok(Self {
            id: UserId::new(format!("mock-user-{}", Uuid::new_v4())),
            email,
            name: Some(name),
            address: None,
            city: None,
            zip: None,
        })
    }

    /// Constructor for data already persisted in the session store
    /// (no validation).
    pub fn from_session(
        id: UserId,
        email: String,
        name: Option<String>,
        address: Option<String>,
        city: Option<String>,
        zip: Option<String>,
    ) -> Self {
        Self {
            id,
            email,
            name,
            address,
            city,
            zip,
        }
    }
}
