use serde::Serialize;

use crate::models::{CameraUpdate, FeatureCollection};
use crate::settings::MapSettings;

/// Clustered GeoJSON source as consumed by the map view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSource<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub cluster: bool,
    pub cluster_radius: u32,
    pub cluster_max_zoom: u32,
    pub data: &'a FeatureCollection,
}

impl<'a> MapSource<'a> {
    pub fn new(data: &'a FeatureCollection, settings: &MapSettings) -> Self {
        Self {
            kind: "geojson",
            cluster: settings.cluster,
            cluster_radius: settings.cluster_radius,
            cluster_max_zoom: settings.cluster_max_zoom,
            data,
        }
    }
}

/// Everything the map view needs for one render.
#[derive(Debug, Clone, Serialize)]
pub struct MapView<'a> {
    pub source: MapSource<'a>,
    pub camera: CameraUpdate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelRow {
    pub index: usize,
    pub name: String,
    pub address_line: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentOption {
    /// Empty value is the "none" option
    pub value: String,
    pub label: String,
}

impl SegmentOption {
    pub fn none() -> Self {
        Self {
            value: String::new(),
            label: "None".to_string(),
        }
    }
}

/// State of the filter panel: inputs, options, button states and the visible list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub search_text: String,
    pub selected_segment: Option<String>,
    pub segment_options: Vec<SegmentOption>,
    pub clear_enabled: bool,
    pub submit_enabled: bool,
    pub rows: Vec<PanelRow>,
}
