use crate::error::{MapperError, Result};
use crate::models::{FeatureCollection, MapView};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

pub struct GeoJsonWriter {
    pretty: bool,
}

impl GeoJsonWriter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Write a bare GeoJSON FeatureCollection
    pub fn write_collection(&self, collection: &FeatureCollection, path: &Path) -> Result<()> {
        self.write_json(collection, path)?;
        info!(path = %path.display(), features = collection.len(), "Wrote GeoJSON collection");
        Ok(())
    }

    /// Write the clustered map source together with the camera target
    pub fn write_map_view(&self, view: &MapView<'_>, path: &Path) -> Result<()> {
        self.write_json(view, path)?;
        info!(
            path = %path.display(),
            features = view.source.data.len(),
            "Wrote map source document"
        );
        Ok(())
    }

    pub fn to_string<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }

    fn write_json<T: Serialize>(&self, value: &T, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(path)?);
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Inspect a file written by this writer, either a bare collection or a map document
    pub fn get_file_info(&self, path: &Path) -> Result<GeoJsonFileInfo> {
        let file_size = std::fs::metadata(path)?.len();
        let value: serde_json::Value = serde_json::from_reader(BufReader::new(File::open(path)?))?;

        let (kind, collection_value) = if value.get("source").is_some() {
            (DocumentKind::MapView, value["source"]["data"].clone())
        } else {
            (DocumentKind::FeatureCollection, value)
        };

        if collection_value.get("type").and_then(|t| t.as_str()) != Some("FeatureCollection") {
            return Err(MapperError::InvalidFormat(format!(
                "{} does not contain a GeoJSON FeatureCollection",
                path.display()
            )));
        }
        let collection: FeatureCollection = serde_json::from_value(collection_value)?;

        Ok(GeoJsonFileInfo {
            kind,
            feature_count: collection.len(),
            segment_count: crate::processors::derive_category_universe(&collection).len(),
            file_size,
        })
    }
}

impl Default for GeoJsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    FeatureCollection,
    MapView,
}

#[derive(Debug, Clone)]
pub struct GeoJsonFileInfo {
    pub kind: DocumentKind,
    pub feature_count: usize,
    pub segment_count: usize,
    pub file_size: u64,
}

impl GeoJsonFileInfo {
    pub fn summary(&self) -> String {
        format!(
            "GeoJSON File Summary:\n\
            - Document: {:?}\n\
            - Features: {}\n\
            - Market segments: {}\n\
            - File size: {:.2} KB",
            self.kind,
            self.feature_count,
            self.segment_count,
            self.file_size as f64 / 1024.0
        )
    }
}
