use serde::{Deserialize, Serialize};

use crate::models::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportTarget {
    pub center: Coordinate,
    pub zoom: f64,
}

impl ViewportTarget {
    pub fn new(center: Coordinate, zoom: f64) -> Self {
        Self { center, zoom }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    EaseInOut,
}

/// Instruction sent to the map view: fly to `target` over `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraUpdate {
    pub center: Coordinate,
    pub zoom: f64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl CameraUpdate {
    pub fn target(&self) -> ViewportTarget {
        ViewportTarget::new(self.center, self.zoom)
    }
}
