use super::FilterStrategy;
use crate::domain::dvd::models::Dvd;
use crate::domain::dvd::models::DvdFilter;

/// Keeps DVDs tagged with at least one requested genre, matched either by
/// exact name or by identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenreFilter;

impl FilterStrategy for GenreFilter {
    fn name(&self) -> &'static str {
        "genre"
    }

    fn applies_to(&self, criteria: &DvdFilter) -> bool {
        criteria.genre_names.is_some() || criteria.genre_ids.is_some()
    }

    fn execute(&self, dvds: Vec<Dvd>, criteria: &DvdFilter) -> Vec<Dvd> {
        let names = criteria.genre_names.as_deref().unwrap_or_default();
        let ids = criteria.genre_ids.as_deref().unwrap_or_default();

        dvds.into_iter()
            .filter(|dvd| dvd.has_genre_named(names) || dvd.has_genre_id(ids))
            .collect()
    }
}
