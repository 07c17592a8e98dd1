use crate::domain::resource::errors::ResourceError;
use crate::domain::resource::models::Resource;

/// Read access to one family of stored images.
pub trait ResourceHandler: Send + Sync + 'static {
    /// Load a stored image by file name.
    ///
    /// # Arguments
    /// * `filename` - Bare file name, no directory components
    ///
    /// # Returns
    /// Image bytes with content type and caching metadata
    ///
    /// # Errors
    /// * `PathTraversal` - Name is not a single plain path component
    /// * `NotFound` - No such file
    /// * `Storage` - Reading the file failed
    fn handle_get_request(&self, filename: &str) -> Result<Resource, ResourceError>;
}

/// Posters can also be uploaded and linked.
pub trait PosterHandler: ResourceHandler {
    /// Decode and store a `data:image/...;base64,` payload.
    ///
    /// # Arguments
    /// * `base64_image` - Data URL carrying the encoded image
    ///
    /// # Returns
    /// Generated file name of the stored poster
    ///
    /// # Errors
    /// * `Validation` - Payload is malformed, of a disallowed type or too large
    /// * `Storage` - Writing the file failed
    fn save_image(&self, base64_image: &str) -> Result<String, ResourceError>;

    /// Public URL under which `filename` is served.
    fn generate_url(&self, filename: &str) -> String;
}
