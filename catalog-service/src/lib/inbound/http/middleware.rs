use auth::ClaimsError;
use auth::UserId;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use chrono::DateTime;
use chrono::Utc;

use super::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Cookie carrying the session token for browser clients.
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// Extension type to store the authenticated session in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub remembered: bool,
    pub session_lifetime_millis: i64,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Middleware that verifies the session token and adds the user to request extensions
///
/// The token is read from `Authorization: Bearer <token>` or, failing that,
/// from the `accessToken` cookie.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(req.headers())?;

    let claims = state
        .claims_extractor
        .verify_and_extract(&token, state.jwt_secret.as_bytes())
        .map_err(|e| {
            tracing::warn!("Session token rejected: {}", e);
            ApiError::Unauthorized(denial_message(&e).to_string())
        })?;

    let user_id = claims.user_id().map_err(|e| {
        tracing::warn!("Failed to parse user ID from token: {}", e);
        ApiError::Unauthorized("Invalid token format".to_string())
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        remembered: claims.is_remembered(),
        session_lifetime_millis: claims.session_lifetime_millis(),
        expires_at: claims.expires_at(),
    });

    Ok(next.run(req).await)
}

fn denial_message(error: &ClaimsError) -> &'static str {
    match error {
        ClaimsError::TokenInvalid(_) => "Invalid token signature",
        ClaimsError::TokenExpired(_) => "Token expired",
        ClaimsError::TokenMalformed(_) => "Invalid token",
        ClaimsError::ClaimFormat(_) => "Invalid token format",
    }
}

fn extract_token(headers: &HeaderMap) -> Result<String, ApiError> {
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        let auth_str = auth_header
            .to_str()
            .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

        return match auth_str.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => Err(ApiError::Unauthorized(
                "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
            )),
        };
    }

    token_from_cookies(headers)
        .ok_or_else(|| ApiError::Unauthorized("Missing authentication token".to_string()))
}

fn token_from_cookies(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == ACCESS_TOKEN_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use super::*;

    fn headers(pairs: &[(header::HeaderName, &str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.append(name.clone(), HeaderValue::from_str(value).unwrap());
        }
        headers
    }

    #[test]
    fn test_bearer_token() {
        let headers = headers(&[(header::AUTHORIZATION, "Bearer abc.def.ghi")]);
        assert_eq!(extract_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_cookie_token() {
        let headers = headers(&[(header::COOKIE, "theme=dark; accessToken=abc.def.ghi; lang=pl")]);
        assert_eq!(extract_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_header_takes_precedence_over_cookie() {
        let headers = headers(&[
            (header::AUTHORIZATION, "Bearer from-header"),
            (header::COOKIE, "accessToken=from-cookie"),
        ]);
        assert_eq!(extract_token(&headers).unwrap(), "from-header");
    }

    #[test]
    fn test_missing_or_malformed_token() {
        assert_eq!(
            extract_token(&HeaderMap::new()),
            Err(ApiError::Unauthorized(
                "Missing authentication token".to_string()
            ))
        );

        let basic = headers(&[(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")]);
        assert!(matches!(
            extract_token(&basic),
            Err(ApiError::Unauthorized(_))
        ));

        let empty_cookie = headers(&[(header::COOKIE, "accessToken=")]);
        assert!(extract_token(&empty_cookie).is_err());
    }

    #[test]
    fn test_denial_messages() {
        assert_eq!(
            denial_message(&ClaimsError::TokenExpired("expired".to_string())),
            "Token expired"
        );
        assert_eq!(
            denial_message(&ClaimsError::TokenInvalid("bad signature".to_string())),
            "Invalid token signature"
        );
        assert_eq!(
            denial_message(&ClaimsError::TokenMalformed("bad json".to_string())),
            "Invalid token"
        );
    }

    #[test]
    fn test_denial_renders_error_body() {
        let response = extract_token(&HeaderMap::new())
            .unwrap_err()
            .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
