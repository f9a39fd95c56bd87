use std::sync::Arc;

use poem_openapi::Object;

use business::domain::auth::model::User;
use business::domain::auth::use_cases::current_session::CurrentSessionUseCase;

/// Answer for unauthenticated access to a guarded page: a login entry point
/// carrying the return target. This is a control-flow redirect, not an error.
#[derive(Object, Debug)]
pub struct LoginRedirect {
    pub redirect: String,
}

pub fn login_redirect(return_to: &str) -> LoginRedirect {
    LoginRedirect {
        redirect: format!("/login?redirect={return_to}"),
    }
}

/// Resolves the current session user, treating storage failures as
/// "no session".
pub async fn current_user(use_case: &Arc<dyn CurrentSessionUseCase>) -> Option<User> {
    use_case.execute().await.ok().flatten()
}
