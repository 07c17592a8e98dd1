use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::domain::resource::errors::ResourceError;

const MEBIBYTE: usize = 1024 * 1024;

/// Image encodings accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Webp,
}

impl ImageFormat {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            "image/png" => Some(ImageFormat::Png),
            "image/webp" => Some(ImageFormat::Webp),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Webp => "webp",
        }
    }
}

/// A decoded upload ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

/// Checks `data:image/<type>;base64,<payload>` uploads.
#[derive(Debug, Clone, Copy)]
pub struct ImageValidator {
    max_size: usize,
}

impl ImageValidator {
    /// # Arguments
    /// * `max_size` - Largest accepted decoded image, in bytes
    pub fn new(max_size: usize) -> Self {
        Self { max_size }
    }

    /// Validate and decode a data URL.
    ///
    /// # Errors
    /// * `Validation` - Empty payload, wrong prefix, not exactly one comma,
    ///   missing `;base64`, unsupported MIME type, bad base64 or too large
    pub fn decode(&self, data_url: &str) -> Result<DecodedImage, ResourceError> {
        if data_url.trim().is_empty() {
            return Err(ResourceError::validation(
                "Poster image cannot be null or empty",
            ));
        }
        if !data_url.starts_with("data:image/") {
            return Err(ResourceError::validation(
                "Invalid image format - must be base64 encoded image",
            ));
        }

        let (prefix, payload) = match data_url.split_once(',') {
            Some((prefix, payload)) if !payload.is_empty() && !payload.contains(',') => {
                (prefix, payload)
            }
            _ => return Err(ResourceError::validation("Invalid base64 image format")),
        };

        if !prefix.contains("data:") || !prefix.contains(";base64") {
            return Err(ResourceError::validation("Invalid data URL format"));
        }
        let mime = prefix
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .unwrap_or_default();
        let format = ImageFormat::from_mime(mime).ok_or_else(|| {
            ResourceError::validation(format!("Unsupported image type: {}", mime))
        })?;

        let bytes = STANDARD
            .decode(payload.trim())
            .map_err(|e| ResourceError::validation(format!("Invalid base64 image data: {}", e)))?;

        if bytes.len() > self.max_size {
            return Err(ResourceError::validation(self.size_limit_message()));
        }

        Ok(DecodedImage { format, bytes })
    }

    fn size_limit_message(&self) -> String {
        if self.max_size >= MEBIBYTE {
            format!("Image size cannot exceed {}MB", self.max_size / MEBIBYTE)
        } else {
            format!("Image size cannot exceed {} bytes", self.max_size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_url(mime: &str, bytes: &[u8]) -> String {
        format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
    }

    fn rejection(result: Result<DecodedImage, ResourceError>) -> String {
        match result {
            Err(ResourceError::Validation(message)) => message,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_supported_formats() {
        let validator = ImageValidator::new(1024);

        let jpeg = validator.decode(&data_url("image/jpg", b"jpeg")).unwrap();
        assert_eq!(jpeg.format, ImageFormat::Jpeg);
        assert_eq!(jpeg.bytes, b"jpeg");

        let webp = validator.decode(&data_url("image/webp", b"riff")).unwrap();
        assert_eq!(webp.format.extension(), "webp");
    }

    #[test]
    fn test_rejects_empty_and_wrong_prefix() {
        let validator = ImageValidator::new(1024);

        assert_eq!(
            rejection(validator.decode("   ")),
            "Poster image cannot be null or empty"
        );
        assert_eq!(
            rejection(validator.decode("data:text/plain;base64,aGk=")),
            "Invalid image format - must be base64 encoded image"
        );
    }

    #[test]
    fn test_rejects_malformed_structure() {
        let validator = ImageValidator::new(1024);

        assert_eq!(
            rejection(validator.decode("data:image/png;base64")),
            "Invalid base64 image format"
        );
        assert_eq!(
            rejection(validator.decode("data:image/png;base64,aGk=,aGk=")),
            "Invalid base64 image format"
        );
        assert_eq!(
            rejection(validator.decode("data:image/png,aGk=")),
            "Invalid data URL format"
        );
    }

    #[test]
    fn test_rejects_unsupported_type() {
        let validator = ImageValidator::new(1024);

        assert_eq!(
            rejection(validator.decode(&data_url("image/gif", b"GIF89a"))),
            "Unsupported image type: image/gif"
        );
    }

    #[test]
    fn test_rejects_invalid_base64() {
        let validator = ImageValidator::new(1024);

        let message = rejection(validator.decode("data:image/png;base64,@@not-base64@@"));
        assert!(message.starts_with("Invalid base64 image data"));
    }

    #[test]
    fn test_enforces_max_size() {
        let validator = ImageValidator::new(4);
        assert!(validator.decode(&data_url("image/png", b"1234")).is_ok());
        assert_eq!(
            rejection(validator.decode(&data_url("image/png", b"12345"))),
            "Image size cannot exceed 4 bytes"
        );

        let validator = ImageValidator::new(2 * MEBIBYTE);
        assert_eq!(
            rejection(validator.decode(&data_url("image/png", &vec![0u8; 2 * MEBIBYTE + 1]))),
            "Image size cannot exceed 2MB"
        );
    }
}
