use serde::{Deserialize, Serialize};
use validator::Validate;

/// A WGS84 position. Serialized in GeoJSON order: `[longitude, latitude]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Self::new(longitude, latitude)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coordinate: Coordinate) -> Self {
        [coordinate.longitude, coordinate.latitude]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Point")]
pub struct PointGeometry {
    pub coordinates: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutletProperties {
    pub name: String,
    pub simplified_market_segment: String,
    pub address: String,
    pub zip_code: String,
    pub city: String,
}

/// A single business location as a GeoJSON point feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct OutletFeature {
    pub geometry: PointGeometry,
    pub properties: OutletProperties,
}

impl OutletFeature {
    pub fn new(coordinate: Coordinate, properties: OutletProperties) -> Self {
        Self {
            geometry: PointGeometry {
                coordinates: coordinate,
            },
            properties,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.geometry.coordinates
    }

    pub fn name(&self) -> &str {
        &self.properties.name
    }

    pub fn segment(&self) -> &str {
        &self.properties.simplified_market_segment
    }

    /// Secondary line shown under the name in the outlet list: `address, zip city`
    pub fn display_address(&self) -> String {
        format!(
            "{}, {} {}",
            self.properties.address, self.properties.zip_code, self.properties.city
        )
    }
}
