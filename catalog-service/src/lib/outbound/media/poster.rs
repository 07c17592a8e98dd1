use uuid::Uuid;

use super::storage::MediaDirectory;
use super::validation::ImageValidator;
use crate::config::MediaConfig;
use crate::domain::resource::errors::ResourceError;
use crate::domain::resource::models::Resource;
use crate::domain::resource::ports::PosterHandler;
use crate::domain::resource::ports::ResourceHandler;

/// Poster images stored as files named `<uuid>.<ext>`.
#[derive(Debug, Clone)]
pub struct FilesystemPosterHandler {
    directory: MediaDirectory,
    validator: ImageValidator,
    base_url: String,
}

impl FilesystemPosterHandler {
    pub fn new(
        directory: MediaDirectory,
        validator: ImageValidator,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            directory,
            validator,
            base_url: base_url.into(),
        }
    }

    /// Build from the media configuration, creating the poster directory.
    ///
    /// # Errors
    /// * `Storage` - The directory could not be created
    pub fn from_config(config: &MediaConfig) -> Result<Self, ResourceError> {
        let directory = MediaDirectory::open(
            &config.poster.dir,
            config.cache_control.as_str(),
            config.default_content_type.as_str(),
        )?;

        Ok(Self::new(
            directory,
            ImageValidator::new(config.poster.max_size),
            config.poster.base_url.as_str(),
        ))
    }
}

impl ResourceHandler for FilesystemPosterHandler {
    fn handle_get_request(&self, filename: &str) -> Result<Resource, ResourceError> {
        tracing::debug!(filename, "Retrieving poster");
        self.directory.load(filename)
    }
}

impl PosterHandler for FilesystemPosterHandler {
    fn save_image(&self, base64_image: &str) -> Result<String, ResourceError> {
        let image = self.validator.decode(base64_image)?;

        let filename = format!("{}.{}", Uuid::new_v4(), image.format.extension());
        self.directory.store(&filename, &image.bytes)?;

        tracing::info!(filename = %filename, size = image.bytes.len(), "Stored poster");
        Ok(filename)
    }

    fn generate_url(&self, filename: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), filename)
    }
}
