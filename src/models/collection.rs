use serde::{Deserialize, Serialize};

use crate::models::OutletFeature;

/// Ordered GeoJSON feature collection. Order is the source row order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<OutletFeature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<OutletFeature>) -> Self {
        Self { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&OutletFeature> {
        self.features.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OutletFeature> {
        self.features.iter()
    }
}

impl From<Vec<OutletFeature>> for FeatureCollection {
    fn from(features: Vec<OutletFeature>) -> Self {
        Self::new(features)
    }
}

impl FromIterator<OutletFeature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = OutletFeature>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a OutletFeature;
    type IntoIter = std::slice::Iter<'a, OutletFeature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}
