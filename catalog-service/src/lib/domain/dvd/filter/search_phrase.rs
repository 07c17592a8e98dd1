use super::FilterStrategy;
use crate::domain::dvd::models::Dvd;
use crate::domain::dvd::models::DvdFilter;

/// Keeps DVDs whose title or description contains the search phrase,
/// ignoring case.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchPhraseFilter;

impl FilterStrategy for SearchPhraseFilter {
    fn name(&self) -> &'static str {
        "search-phrase"
    }

    fn applies_to(&self, criteria: &DvdFilter) -> bool {
        criteria.search_phrase.is_some()
    }

    fn execute(&self, dvds: Vec<Dvd>, criteria: &DvdFilter) -> Vec<Dvd> {
        let Some(phrase) = criteria.search_phrase.as_deref() else {
            return dvds;
        };
        let phrase = phrase.to_lowercase();

        dvds.into_iter()
            .filter(|dvd| matches_phrase(dvd, &phrase))
            .collect()
    }
}

fn matches_phrase(dvd: &Dvd, phrase: &str) -> bool {
    dvd.title.to_lowercase().contains(phrase) || dvd.description.to_lowercase().contains(phrase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dvd::models::test_support::dvd;

    fn catalog() -> Vec<Dvd> {
        vec![
            dvd(1, "The Matrix", "Neo wakes up", vec![]),
            dvd(2, "Alien", "In space no one can hear the matrix", vec![]),
            dvd(3, "Heat", "A heist in Los Angeles", vec![]),
        ]
    }

    #[test]
    fn test_applies_only_with_phrase() {
        assert!(!SearchPhraseFilter.applies_to(&DvdFilter::new()));
        assert!(SearchPhraseFilter.applies_to(&DvdFilter::new().with_search_phrase("")));
    }

    #[test]
    fn test_matches_title_and_description_case_insensitively() {
        let criteria = DvdFilter::new().with_search_phrase("MaTrIx");

        let ids: Vec<i64> = SearchPhraseFilter
            .execute(catalog(), &criteria)
            .iter()
            .map(|d| d.id.0)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_empty_phrase_keeps_everything() {
        let criteria = DvdFilter::new().with_search_phrase("");
        assert_eq!(SearchPhraseFilter.execute(catalog(), &criteria), catalog());
    }
}
