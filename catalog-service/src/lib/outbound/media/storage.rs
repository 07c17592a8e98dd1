use std::fs;
use std::io;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::resource::errors::ResourceError;
use crate::domain::resource::models::Resource;

/// A directory of served image files.
#[derive(Debug, Clone)]
pub struct MediaDirectory {
    root: PathBuf,
    cache_control: String,
    default_content_type: String,
}

impl MediaDirectory {
    /// Open `root`, creating it when missing.
    ///
    /// # Errors
    /// * `Storage` - The directory could not be created
    pub fn open(
        root: impl Into<PathBuf>,
        cache_control: impl Into<String>,
        default_content_type: impl Into<String>,
    ) -> Result<Self, ResourceError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            ResourceError::Storage(format!(
                "Failed to create media directory {}: {}",
                root.display(),
                e
            ))
        })?;

        tracing::info!(dir = %root.display(), "Media directory ready");

        Ok(Self {
            root,
            cache_control: cache_control.into(),
            default_content_type: default_content_type.into(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `filename` inside the directory.
    ///
    /// Only a single plain path component is accepted: separators, `.`,
    /// `..` and absolute paths are rejected.
    ///
    /// # Errors
    /// * `PathTraversal` - `filename` would escape or nest inside the directory
    pub fn resolve(&self, filename: &str) -> Result<PathBuf, ResourceError> {
        let mut components = Path::new(filename).components();

        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if name == filename => Ok(self.root.join(name)),
            _ => {
                tracing::warn!(filename, "Rejected media path outside directory");
                Err(ResourceError::PathTraversal(filename.to_string()))
            }
        }
    }

    /// Read `filename` with its caching metadata.
    ///
    /// # Errors
    /// * `PathTraversal` - Name is not a single plain component
    /// * `NotFound` - No such file
    /// * `Storage` - Reading the file failed
    pub fn load(&self, filename: &str) -> Result<Resource, ResourceError> {
        let path = self.resolve(filename)?;

        let metadata = fs::metadata(&path).map_err(|e| read_error(filename, e))?;
        if !metadata.is_file() {
            return Err(ResourceError::NotFound(filename.to_string()));
        }
        let bytes = fs::read(&path).map_err(|e| read_error(filename, e))?;

        let last_modified = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());

        Ok(Resource {
            filename: filename.to_string(),
            content_type: self.content_type_for(filename),
            bytes,
            etag: format!("\"{}_{}\"", filename, last_modified.timestamp_millis()),
            cache_control: self.cache_control.clone(),
            last_modified,
        })
    }

    /// Write `bytes` as `filename`, replacing any existing file.
    ///
    /// # Errors
    /// * `PathTraversal` - Name is not a single plain component
    /// * `Storage` - Writing the file failed
    pub fn store(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, ResourceError> {
        let path = self.resolve(filename)?;
        fs::create_dir_all(&self.root)?;
        fs::write(&path, bytes)?;
        Ok(path)
    }

    /// Content type derived from the file extension.
    pub fn content_type_for(&self, filename: &str) -> String {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("jpg") | Some("jpeg") => "image/jpeg".to_string(),
            Some("png") => "image/png".to_string(),
            Some("webp") => "image/webp".to_string(),
            _ => self.default_content_type.clone(),
        }
    }
}

fn read_error(filename: &str, err: io::Error) -> ResourceError {
    match err.kind() {
        io::ErrorKind::NotFound => ResourceError::NotFound(filename.to_string()),
        _ => ResourceError::Storage(format!("Failed to read {}: {}", filename, err)),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn directory() -> (TempDir, MediaDirectory) {
        let temp = tempfile::tempdir().unwrap();
        let directory =
            MediaDirectory::open(temp.path(), "max-age=3600", "application/octet-stream").unwrap();
        (temp, directory)
    }

    #[test]
    fn test_open_creates_missing_directory() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("media").join("posters");

        let directory = MediaDirectory::open(&nested, "no-cache", "image/jpeg").unwrap();

        assert!(nested.is_dir());
        assert_eq!(directory.root(), nested.as_path());
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let (_temp, directory) = directory();

        for name in ["../secret.png", "a/b.png", "/etc/passwd", ".", "..", "", "dir/"] {
            assert_eq!(
                directory.resolve(name),
                Err(ResourceError::PathTraversal(name.to_string())),
                "accepted {:?}",
                name
            );
        }
        assert!(directory.resolve("poster.png").is_ok());
    }

    #[test]
    fn test_store_then_load() {
        let (_temp, directory) = directory();

        directory.store("cover.PNG", b"png-bytes").unwrap();
        let resource = directory.load("cover.PNG").unwrap();

        assert_eq!(resource.bytes, b"png-bytes");
        assert_eq!(resource.content_type, "image/png");
        assert_eq!(resource.cache_control, "max-age=3600");
        assert_eq!(
            resource.etag,
            format!("\"cover.PNG_{}\"", resource.last_modified.timestamp_millis())
        );
    }

    #[test]
    fn test_load_missing_file() {
        let (_temp, directory) = directory();

        assert_eq!(
            directory.load("missing.jpg"),
            Err(ResourceError::NotFound("missing.jpg".to_string()))
        );
    }

    #[test]
    fn test_load_directory_is_not_found() {
        let (temp, directory) = directory();
        fs::create_dir(temp.path().join("nested")).unwrap();

        assert!(matches!(
            directory.load("nested"),
            Err(ResourceError::NotFound(_))
        ));
    }

    #[test]
    fn test_unknown_extension_uses_default_content_type() {
        let (_temp, directory) = directory();

        assert_eq!(directory.content_type_for("photo.jpeg"), "image/jpeg");
        assert_eq!(directory.content_type_for("poster.webp"), "image/webp");
        assert_eq!(
            directory.content_type_for("notes.txt"),
            "application/octet-stream"
        );
        assert_eq!(directory.content_type_for("noext"), "application/octet-stream");
    }
}
