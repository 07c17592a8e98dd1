use super::storage::MediaDirectory;
use crate::config::MediaConfig;
use crate::domain::resource::errors::ResourceError;
use crate::domain::resource::models::Resource;
use crate::domain::resource::ports::ResourceHandler;

/// Read-only access to user avatar files.
#[derive(Debug, Clone)]
pub struct FilesystemAvatarHandler {
    directory: MediaDirectory,
}

impl FilesystemAvatarHandler {
    pub fn new(directory: MediaDirectory) -> Self {
        Self { directory }
    }

    /// Build from the media configuration, creating the avatar directory.
    pub fn from_config(config: &MediaConfig) -> Result<Self, ResourceError> {
        let directory = MediaDirectory::open(
            &config.avatar.dir,
            config.cache_control.as_str(),
            config.default_content_type.as_str(),
        )?;
        Ok(Self::new(directory))
    }
}

impl ResourceHandler for FilesystemAvatarHandler {
    fn handle_get_request(&self, filename: &str) -> Result<Resource, ResourceError> {
        tracing::debug!(filename, "Retrieving avatar");
        self.directory.load(filename)
    }
}
