use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::auth::model::User;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct LoginRequest {
    pub email: String,
    /// Accepted but never verified; the identity backend is a mock
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UpdateProfileRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub address: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub city: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub zip: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub address: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub city: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub zip: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.as_str().to_string(),
            email: user.email,
            name: user.name,
            address: user.address,
            city: user.city,
            zip: user.zip,
        }
    }
}
