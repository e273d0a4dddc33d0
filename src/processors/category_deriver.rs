use crate::models::FeatureCollection;
use std::collections::HashSet;

/// Distinct market segments in first-occurrence order.
pub fn derive_category_universe(collection: &FeatureCollection) -> Vec<String> {
    let mut seen = HashSet::new();
    collection
        .iter()
        .map(|feature| feature.segment())
        .filter(|segment| seen.insert(*segment))
        .map(str::to_string)
        .collect()
}
