use crate::models::{FeatureCollection, FilterCriteria, OutletFeature, TextMatchMode};

/// Derives the visible subset of a collection from filter criteria.
///
/// Always filters the collection it is given, never a previous result, and
/// keeps source order.
///
/// With [`TextMatchMode::Characters`] the lower-cased search text is taken one
/// character at a time and a name matches when every one of those characters
/// appears somewhere in it, in any order: `"ace"` matches `"Le Cafe"`.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    text_match: TextMatchMode,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text_match(mut self, text_match: TextMatchMode) -> Self {
        self.text_match = text_match;
        self
    }

    pub fn apply(
        &self,
        collection: &FeatureCollection,
        criteria: &FilterCriteria,
    ) -> FeatureCollection {
        let search = criteria.search_text.to_lowercase();
        let category = criteria.category();

        collection
            .iter()
            .filter(|feature| self.matches_prepared(feature, &search, category))
            .cloned()
            .collect()
    }

    pub fn matches(&self, feature: &OutletFeature, criteria: &FilterCriteria) -> bool {
        self.matches_prepared(
            feature,
            &criteria.search_text.to_lowercase(),
            criteria.category(),
        )
    }

    fn matches_prepared(
        &self,
        feature: &OutletFeature,
        search: &str,
        category: Option<&str>,
    ) -> bool {
        self.matches_text(feature.name(), search) && matches_category(feature.segment(), category)
    }

    /// `search` must already be lower-cased.
    fn matches_text(&self, name: &str, search: &str) -> bool {
        if search.is_empty() {
            return true;
        }
        let name = name.to_lowercase();
        match self.text_match {
            TextMatchMode::Characters => search.chars().all(|c| name.contains(c)),
            TextMatchMode::Substring => name.contains(search),
        }
    }
}

fn matches_category(segment: &str, category: Option<&str>) -> bool {
    category.map_or(true, |wanted| segment == wanted)
}
