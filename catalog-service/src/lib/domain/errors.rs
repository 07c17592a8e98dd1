/// Coarse classification shared by every domain error.
///
/// Adapters map on this instead of matching each concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested thing does not exist.
    NotFound,
    /// The caller supplied something unacceptable.
    InvalidInput,
    /// Startup wiring is inconsistent (duplicate or missing strategies).
    ConfigurationDefect,
    /// Storage, rendering or other infrastructure failure.
    Internal,
}
