use thiserror::Error;

/// Error type for token verification and claim extraction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClaimsError {
    /// Token cannot be parsed (bad segments, base64, JSON or missing claims).
    #[error("Token is malformed: {0}")]
    TokenMalformed(String),

    /// Signature does not verify against the key derived from the secret.
    #[error("Token signature is invalid: {0}")]
    TokenInvalid(String),

    /// Expiration time has passed.
    #[error("Token has expired: {0}")]
    TokenExpired(String),

    /// A claim is present but does not have the expected shape.
    #[error("Claim has invalid format: {0}")]
    ClaimFormat(String),
}

impl From<jsonwebtoken::errors::Error> for ClaimsError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::InvalidSignature
            | ErrorKind::InvalidAlgorithm
            | ErrorKind::InvalidAlgorithmName => ClaimsError::TokenInvalid(err.to_string()),
            ErrorKind::ExpiredSignature => ClaimsError::TokenExpired(err.to_string()),
            _ => ClaimsError::TokenMalformed(err.to_string()),
        }
    }
}
