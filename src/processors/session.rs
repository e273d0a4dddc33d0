use crate::error::Result;
use crate::models::{
    CameraUpdate, FeatureCollection, FilterCriteria, MapSource, MapView, OutletFeature, PanelRow,
    PanelView, SegmentOption,
};
use crate::processors::{
    derive_category_universe, BuildReport, FeatureBuilder, FeatureStore, FilterEngine,
    ViewportController,
};
use crate::readers::{DataSource, OutletReader};
use crate::settings::Settings;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No data yet; the map renders nothing.
    Pending,
    Loaded,
    /// The load failed; the session continues with an empty collection.
    Failed,
}

/// Owns all per-session state and applies user and load events one at a time.
///
/// Derived state (visible collection, segment list) is recomputed explicitly
/// by the handler of each event rather than tracked reactively.
pub struct Session {
    settings: Settings,
    reader: OutletReader,
    builder: FeatureBuilder,
    engine: FilterEngine,
    store: FeatureStore,
    criteria: FilterCriteria,
    visible: FeatureCollection,
    categories: Vec<String>,
    viewport: ViewportController,
    load_state: LoadState,
    build_report: BuildReport,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        let reader = OutletReader::new(settings.columns.clone())
            .with_delimiter(settings.data.delimiter_byte());
        let builder = FeatureBuilder::new(settings.columns.clone());
        let engine = FilterEngine::new().with_text_match(settings.filter.text_match);
        let viewport = ViewportController::new(settings.viewport.clone());

        Self {
            settings,
            reader,
            builder,
            engine,
            store: FeatureStore::new(),
            criteria: FilterCriteria::default(),
            visible: FeatureCollection::default(),
            categories: Vec::new(),
            viewport,
            load_state: LoadState::Pending,
            build_report: BuildReport::default(),
        }
    }

    /// Fetch and build the dataset. Failures are logged and leave the store empty.
    ///
    /// Only the first call has any effect; the collection is fixed for the
    /// rest of the session.
    pub async fn load(&mut self, source: &DataSource) -> LoadState {
        if self.load_state != LoadState::Pending {
            warn!(state = ?self.load_state, "Dataset already loaded for this session");
            return self.load_state;
        }

        match self.fetch_features(source).await {
            Ok((collection, report)) => {
                info!(
                    source = %source.describe(),
                    features = report.features_built,
                    skipped = report.skipped_rows(),
                    "Loaded outlet dataset"
                );
                self.build_report = report;
                self.load_state = LoadState::Loaded;
                self.set_features(collection);
            }
            Err(e) => {
                error!(source = %source.describe(), error = %e, "Failed to load outlet dataset");
                self.load_state = LoadState::Failed;
                self.set_features(FeatureCollection::default());
            }
        }

        self.load_state
    }

    async fn fetch_features(
        &self,
        source: &DataSource,
    ) -> Result<(FeatureCollection, BuildReport)> {
        let records = self.reader.fetch_records(source).await?;
        Ok(self.builder.build_with_report(&records))
    }

    /// Install the canonical collection and recompute everything derived from it.
    fn set_features(&mut self, collection: FeatureCollection) {
        self.store.set_features(collection);
        self.on_store_changed();
    }

    fn on_store_changed(&mut self) {
        self.categories = derive_category_universe(self.store.collection());
        self.visible = self.store.collection().clone();
        self.viewport.reset();
        debug!(
            revision = self.store.revision(),
            features = self.store.len(),
            segments = self.categories.len(),
            "Feature store changed"
        );
    }

    pub fn set_search_text(&mut self, search_text: impl Into<String>) {
        self.criteria.set_search_text(search_text);
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.criteria.set_category(category);
    }

    /// Recompute the visible collection from the canonical one. Viewport is untouched.
    pub fn submit_filters(&mut self) -> &FeatureCollection {
        self.visible = self.engine.apply(self.store.collection(), &self.criteria);
        debug!(
            search = %self.criteria.search_text,
            category = ?self.criteria.category(),
            visible = self.visible.len(),
            "Filters applied"
        );
        &self.visible
    }

    pub fn clear_filters(&mut self) -> CameraUpdate {
        self.criteria.clear();
        self.visible = self.store.collection().clone();
        debug!(visible = self.visible.len(), "Filters cleared");
        self.viewport.reset()
    }

    /// Focus the viewport on the `index`-th visible outlet.
    pub fn select(&mut self, index: usize) -> Option<CameraUpdate> {
        let feature = self.visible.get(index)?;
        Some(self.viewport.focus(feature))
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn build_report(&self) -> &BuildReport {
        &self.build_report
    }

    pub fn features(&self) -> &FeatureCollection {
        self.store.collection()
    }

    pub fn visible(&self) -> &FeatureCollection {
        &self.visible
    }

    pub fn visible_feature(&self, index: usize) -> Option<&OutletFeature> {
        self.visible.get(index)
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn camera(&self) -> CameraUpdate {
        self.viewport.camera_update()
    }

    /// `None` until a load has completed, so nothing is drawn in the meantime.
    pub fn map_view(&self) -> Option<MapView<'_>> {
        if self.load_state == LoadState::Pending {
            return None;
        }
        Some(MapView {
            source: MapSource::new(&self.visible, &self.settings.map),
            camera: self.viewport.camera_update(),
        })
    }

    pub fn panel(&self) -> PanelView {
        let mut segment_options = vec![SegmentOption::none()];
        segment_options.extend(self.categories.iter().map(|segment| SegmentOption {
            value: segment.clone(),
            label: segment.clone(),
        }));

        let filters_active = self.criteria.is_active();

        PanelView {
            search_text: self.criteria.search_text.clone(),
            selected_segment: self.criteria.category().map(str::to_string),
            segment_options,
            clear_enabled: filters_active,
            submit_enabled: filters_active,
            rows: self
                .visible
                .iter()
                .enumerate()
                .map(|(index, feature)| PanelRow {
                    index,
                    name: feature.name().to_string(),
                    address_line: feature.display_address(),
                })
                .collect(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
