use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// DVD unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DvdId(pub i64);

impl fmt::Display for DvdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Genre unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreId(pub i64);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

/// Catalog entry for a rentable DVD title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dvd {
    pub id: DvdId,
    pub title: String,
    pub genres: Vec<Genre>,
    pub release_year: i32,
    pub directors: Vec<String>,
    pub description: String,
    pub duration_minutes: i32,
    pub poster_url: String,
    pub added_at: DateTime<Utc>,
    pub available: bool,
    pub copies_available: i32,
    pub rental_price_per_day: f64,
}

impl Dvd {
    pub fn has_genre_named(&self, names: &[String]) -> bool {
        self.genres.iter().any(|genre| names.contains(&genre.name))
    }

    pub fn has_genre_id(&self, ids: &[GenreId]) -> bool {
        self.genres.iter().any(|genre| ids.contains(&genre.id))
    }
}

/// Filter criteria for a DVD listing.
///
/// Every field is optional; an absent field leaves the listing untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DvdFilter {
    /// Case-insensitive phrase matched against title and description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_phrase: Option<String>,

    /// Genre names to match (any of)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_names: Option<Vec<String>>,

    /// Genre identifiers to match (any of)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_ids: Option<Vec<GenreId>>,
}

impl DvdFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_phrase(mut self, phrase: impl ToString) -> Self {
        self.search_phrase = Some(phrase.to_string());
        self
    }

    pub fn with_genre_names<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: ToString,
    {
        self.genre_names = Some(names.into_iter().map(|n| n.to_string()).collect());
        self
    }

    pub fn with_genre_ids(mut self, ids: impl IntoIterator<Item = GenreId>) -> Self {
        self.genre_ids = Some(ids.into_iter().collect());
        self
    }

    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.search_phrase.is_none() && self.genre_names.is_none() && self.genre_ids.is_none()
    }
}
