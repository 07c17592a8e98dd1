pub mod claims;
pub mod errors;
pub mod extractor;

pub use claims::Claims;
pub use claims::UserId;
pub use errors::ClaimsError;
pub use extractor::ClaimsExtractor;
