use std::fmt;

use chrono::DateTime;
use chrono::Utc;

/// The two image families served by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageType {
    Poster,
    Avatar,
}

impl ImageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::Poster => "poster",
            ImageType::Avatar => "avatar",
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored image together with its HTTP caching metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub etag: String,
    pub cache_control: String,
    pub last_modified: DateTime<Utc>,
}

impl Resource {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
