use crate::models::FeatureCollection;

/// Holds the canonical, unfiltered outlet collection for a session.
///
/// The collection is replaced as a whole and never edited in place; each
/// replacement bumps `revision` so dependants can tell the store changed.
#[derive(Debug, Default)]
pub struct FeatureStore {
    collection: FeatureCollection,
    revision: u64,
}

impl FeatureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_features(&mut self, collection: FeatureCollection) {
        self.collection = collection;
        self.revision += 1;
    }

    pub fn collection(&self) -> &FeatureCollection {
        &self.collection
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }
}
