//! Session token verification library
//!
//! Verifies HMAC-signed, unexpired session tokens and extracts typed claims:
//! - Subject as a numeric user identifier
//! - Issued-at / expiration timestamps and the derived session lifetime
//! - The custom "remembered" session flag
//!
//! Token issuance lives elsewhere; this crate only verifies and reads.
//! The extractor holds no state; every call re-verifies the signature.
//!
//! # Examples
//!
//! ```
//! use auth::{Claims, ClaimsExtractor, UserId};
//! use jsonwebtoken::{encode, EncodingKey, Header};
//!
//! let secret = b"secret_key_at_least_32_bytes_long!";
//! let now = chrono::Utc::now().timestamp();
//! let claims = Claims::new("42", now, now + 3_600).with_remembered(true);
//! let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(secret)).unwrap();
//!
//! let extractor = ClaimsExtractor::new();
//! assert_eq!(extractor.extract_user_id(&token, secret).unwrap(), UserId(42));
//! assert_eq!(extractor.extract_session_lifetime_millis(&token, secret).unwrap(), 3_600_000);
//! assert!(extractor.extract_remembered(&token, secret).unwrap());
//! ```

pub mod jwt;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::ClaimsError;
pub use jwt::ClaimsExtractor;
pub use jwt::UserId;
