use jsonwebtoken::decode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::UserId;
use super::errors::ClaimsError;

/// HMAC algorithms accepted for session tokens.
const HMAC_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Verifies signed session tokens and extracts typed claims.
///
/// The HMAC key is derived from the secret and the signature re-verified on
/// every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaimsExtractor;

impl ClaimsExtractor {
    /// Create a new claims extractor.
    pub fn new() -> Self {
        Self
    }

    /// Verify a token signature and expiry, then decode its claims.
    ///
    /// # Arguments
    /// * `token` - Compact-serialized signed token
    /// * `secret` - Shared HMAC secret
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `TokenInvalid` - Signature does not verify or algorithm is not HMAC
    /// * `TokenExpired` - `exp` lies in the past
    /// * `TokenMalformed` - Token or payload cannot be parsed
    pub fn verify_and_extract(&self, token: &str, secret: &[u8]) -> Result<Claims, ClaimsError> {
        let key = DecodingKey::from_secret(secret);

        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = HMAC_ALGORITHMS.to_vec();
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.validate_aud = false;

        let token_data = decode::<Claims>(token, &key, &validation)?;

        Ok(token_data.claims)
    }

    /// Extract the numeric user identifier from the subject claim.
    ///
    /// # Errors
    /// * `TokenInvalid` / `TokenExpired` / `TokenMalformed` - See [`Self::verify_and_extract`]
    /// * `ClaimFormat` - Subject is not numeric
    pub fn extract_user_id(&self, token: &str, secret: &[u8]) -> Result<UserId, ClaimsError> {
        self.verify_and_extract(token, secret)?.user_id()
    }

    /// Extract the session lifetime (`exp - iat`) in milliseconds.
    pub fn extract_session_lifetime_millis(
        &self,
        token: &str,
        secret: &[u8],
    ) -> Result<i64, ClaimsError> {
        Ok(self
            .verify_and_extract(token, secret)?
            .session_lifetime_millis())
    }

    /// Extract the remembered flag, `false` when the claim is absent.
    pub fn extract_remembered(&self, token: &str, secret: &[u8]) -> Result<bool, ClaimsError> {
        Ok(self.verify_and_extract(token, secret)?.is_remembered())
    }
}
