use std::sync::Arc;

use crate::domain::resource::errors::ResourceError;
use crate::domain::resource::models::ImageType;
use crate::domain::resource::models::Resource;
use crate::domain::resource::ports::PosterHandler;
use crate::domain::resource::ports::ResourceHandler;

/// Routes image requests to the poster or avatar handler.
///
/// The image family set is closed, so dispatch is a plain match rather than
/// a registry.
pub struct ResourceDispatcher<P, A>
where
    P: PosterHandler,
    A: ResourceHandler,
{
    poster_handler: Arc<P>,
    avatar_handler: Arc<A>,
}

impl<P, A> Clone for ResourceDispatcher<P, A>
where
    P: PosterHandler,
    A: ResourceHandler,
{
    fn clone(&self) -> Self {
        Self {
            poster_handler: Arc::clone(&self.poster_handler),
            avatar_handler: Arc::clone(&self.avatar_handler),
        }
    }
}

impl<P, A> ResourceDispatcher<P, A>
where
    P: PosterHandler,
    A: ResourceHandler,
{
    /// Create a dispatcher over the two image handlers.
    ///
    /// # Arguments
    /// * `poster_handler` - Poster storage implementation
    /// * `avatar_handler` - Avatar storage implementation
    pub fn new(poster_handler: Arc<P>, avatar_handler: Arc<A>) -> Self {
        Self {
            poster_handler,
            avatar_handler,
        }
    }

    /// Load an image of the given family.
    ///
    /// # Errors
    /// * `NotFound` - No such file
    /// * `PathTraversal` - Name is not a plain file name
    /// * `Storage` - Reading the file failed
    pub fn get(&self, image_type: ImageType, filename: &str) -> Result<Resource, ResourceError> {
        let result = match image_type {
            ImageType::Poster => self.poster_handler.handle_get_request(filename),
            ImageType::Avatar => self.avatar_handler.handle_get_request(filename),
        };

        if let Err(e) = &result {
            tracing::debug!(%image_type, filename, "Image retrieval failed: {}", e);
        }

        result
    }

    pub fn get_poster(&self, filename: &str) -> Result<Resource, ResourceError> {
        self.get(ImageType::Poster, filename)
    }

    pub fn get_avatar(&self, filename: &str) -> Result<Resource, ResourceError> {
        self.get(ImageType::Avatar, filename)
    }

    /// Store an uploaded poster.
    ///
    /// # Returns
    /// Generated file name
    ///
    /// # Errors
    /// * `Validation` - Payload is malformed, of a disallowed type or too large
    /// * `Storage` - Writing the file failed
    pub fn save_poster(&self, base64_image: &str) -> Result<String, ResourceError> {
        let filename = self.poster_handler.save_image(base64_image)?;
        tracing::info!(filename = %filename, "Poster saved");
        Ok(filename)
    }

    /// Public URL of a poster; `None` when there is no file name.
    pub fn poster_url(&self, filename: &str) -> Option<String> {
        if filename.trim().is_empty() {
            return None;
        }
        Some(self.poster_handler.generate_url(filename))
    }
}
