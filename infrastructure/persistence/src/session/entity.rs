use serde::{Deserialize, Serialize};

use business::domain::auth::model::User;
use business::domain::shared::value_objects::UserId;

/// Persisted session user under the `shopwave-user` key.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEntity {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

impl UserEntity {
    pub fn from_domain(user: &User) -> Self {
        Self {
            id: user.id.as_str().to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            address: user.address.clone(),
            city: user.city.clone(),
            zip: user.zip.clone(),
        }
    }

    pub fn into_domain(self) -> User {
        User::from_session(
            UserId::new(self.id),
            self.email,
            self.name,
            self.address,
            self.city,
            self.zip,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_omit_absent_optional_fields() {
        let user = User::from_session(UserId::new("u1"), "a@b.com".to_string(), None, None, None, None);
        let json = serde_json::to_value(UserEntity::from_domain(&user)).unwrap();

        assert_eq!(json["id"], "u1");
        assert!(json.get("name").is_none());
        assert!(json.get("address").is_none());
    }

    #[test]
    fn should_round_trip_full_profile() {
        let user = User::from_session(
            UserId::new("u1"),
            "a@b.com".to_string(),
            Some("John Doe".to_string()),
            Some("1 Main St".to_string()),
            Some("Springfield".to_string()),
            Some("12345".to_string()),
        );

        let entity = UserEntity::from_domain(&user);
        let round_tripped = entity.into_domain();

        assert_eq!(round_tripped, user);
    }
}
