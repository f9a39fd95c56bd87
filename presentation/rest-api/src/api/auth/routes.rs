use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::auth::use_cases::current_session::CurrentSessionUseCase;
use business::domain::auth::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::auth::use_cases::logout::LogoutUseCase;
use business::domain::auth::use_cases::signup::{SignupParams, SignupUseCase};
use business::domain::auth::use_cases::update_profile::{
    UpdateProfileParams, UpdateProfileUseCase,
};

use crate::api::auth::dto::{LoginRequest, SignupRequest, UpdateProfileRequest, UserResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::guard::{LoginRedirect, current_user, login_redirect};
use crate::api::tags::ApiTags;

pub struct AuthApi {
    login_use_case: Arc<dyn LoginUseCase>,
    signup_use_case: Arc<dyn SignupUseCase>,
    logout_use_case: Arc<dyn LogoutUseCase>,
    current_session_use_case: Arc<dyn CurrentSessionUseCase>,
    update_profile_use_case: Arc<dyn UpdateProfileUseCase>,
}

impl AuthApi {
    pub fn new(
        login_use_case: Arc<dyn LoginUseCase>,
        signup_use_case: Arc<dyn SignupUseCase>,
        logout_use_case: Arc<dyn LogoutUseCase>,
        current_session_use_case: Arc<dyn CurrentSessionUseCase>,
        update_profile_use_case: Arc<dyn UpdateProfileUseCase>,
    ) -> Self {
        Self {
            login_use_case,
            signup_use_case,
            logout_use_case,
            current_session_use_case,
            update_profile_use_case,
        }
    }
}

/// Session API
///
/// Mocked authentication: any email/password pair succeeds. The session is
/// client-local and never expires.
#[OpenApi]
impl AuthApi {
    /// Log in
    #[oai(path = "/auth/login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, request: Json<LoginRequest>) -> SessionResponse {
        let params = LoginParams {
            email: request.0.email,
            password: request.0.password,
        };

        match self.login_use_case.execute(params).await {
            Ok(user) => SessionResponse::Ok(Json(user.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                SessionResponse::BadRequest(json)
            }
        }
    }

    /// Sign up
    #[oai(path = "/auth/signup", method = "post", tag = "ApiTags::Auth")]
    async fn signup(&self, request: Json<SignupRequest>) -> SessionResponse {
        let params = SignupParams {
            email: request.0.email,
            password: request.0.password,
            name: request.0.name,
        };

        match self.signup_use_case.execute(params).await {
            Ok(user) => SessionResponse::Ok(Json(user.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                SessionResponse::BadRequest(json)
            }
        }
    }

    /// Log out
    #[oai(path = "/auth/logout", method = "post", tag = "ApiTags::Auth")]
    async fn logout(&self) -> LogoutResponse {
        match self.logout_use_case.execute().await {
            Ok(()) => LogoutResponse::NoContent,
            Err(err) => {
                let (_, json) = err.into_error_response();
                LogoutResponse::InternalError(json)
            }
        }
    }

    /// Current session profile
    #[oai(path = "/auth/me", method = "get", tag = "ApiTags::Auth")]
    async fn me(&self) -> ProfileResponse {
        match current_user(&self.current_session_use_case).await {
            Some(user) => ProfileResponse::Ok(Json(user.into())),
            None => ProfileResponse::Unauthorized(Json(login_redirect("/profile"))),
        }
    }

    /// Update the session profile
    #[oai(path = "/auth/profile", method = "put", tag = "ApiTags::Auth")]
    async fn update_profile(&self, request: Json<UpdateProfileRequest>) -> ProfileResponse {
        if current_user(&self.current_session_use_case).await.is_none() {
            return ProfileResponse::Unauthorized(Json(login_redirect("/profile")));
        }

        let params = UpdateProfileParams {
            name: request.0.name,
            address: request.0.address,
            city: request.0.city,
            zip: request.0.zip,
        };

        match self.update_profile_use_case.execute(params).await {
            Ok(user) => ProfileResponse::Ok(Json(user.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                ProfileResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SessionResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LogoutResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProfileResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<LoginRedirect>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
