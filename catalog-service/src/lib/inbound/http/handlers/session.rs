use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

pub async fn get_session(
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<SessionResponseData>, ApiError> {
    Ok(ApiSuccess::new(StatusCode::OK, (&user).into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResponseData {
    pub user_id: i64,
    pub remembered: bool,
    pub session_lifetime_millis: i64,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<&AuthenticatedUser> for SessionResponseData {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            user_id: user.user_id.0,
            remembered: user.remembered,
            session_lifetime_millis: user.session_lifetime_millis,
            expires_at: user.expires_at,
        }
    }
}
