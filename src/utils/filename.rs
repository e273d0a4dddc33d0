use chrono::{Datelike, Local};
use std::path::PathBuf;

/// Generate default GeoJSON filename with format: outlets-{YYMMDD}.geojson
pub fn generate_default_geojson_filename() -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100;

    let filename = format!("outlets-{:02}{:02}{:02}.geojson", year, now.month(), now.day());
    PathBuf::from("output").join(filename)
}
