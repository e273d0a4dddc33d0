use crate::error::{MapperError, Result};
use crate::models::RawRecord;
use crate::settings::ColumnMapping;
use csv::{ReaderBuilder, StringRecord};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where the outlet table comes from.
#[derive(Debug, Clone)]
pub enum DataSource {
    File(PathBuf),
    Bytes(Vec<u8>),
}

impl DataSource {
    pub fn describe(&self) -> String {
        match self {
            DataSource::File(path) => path.display().to_string(),
            DataSource::Bytes(bytes) => format!("<{} in-memory bytes>", bytes.len()),
        }
    }
}

impl From<&Path> for DataSource {
    fn from(path: &Path) -> Self {
        DataSource::File(path.to_path_buf())
    }
}

/// Reads a delimited outlet table with a header row into raw records.
#[derive(Debug, Clone)]
pub struct OutletReader {
    delimiter: u8,
    columns: ColumnMapping,
}

impl OutletReader {
    pub fn new(columns: ColumnMapping) -> Self {
        Self {
            delimiter: b',',
            columns,
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Fetch, decode and parse the source. Parsing runs off the async executor.
    pub async fn fetch_records(&self, source: &DataSource) -> Result<Vec<RawRecord>> {
        let bytes = match source {
            DataSource::File(path) => tokio::fs::read(path).await?,
            DataSource::Bytes(bytes) => bytes.clone(),
        };

        let reader = self.clone();
        tokio::task::spawn_blocking(move || reader.parse_bytes(&bytes)).await?
    }

    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<RawRecord>> {
        let text = decode_text(bytes);
        self.parse_text(&text)
    }

    pub fn parse_text(&self, text: &str) -> Result<Vec<RawRecord>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();
        self.check_headers(&headers)?;

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;
            records.push(
                headers
                    .iter()
                    .map(str::trim)
                    .zip(row.iter())
                    .collect::<RawRecord>(),
            );
        }

        debug!(rows = records.len(), "Parsed outlet table");
        Ok(records)
    }

    fn check_headers(&self, headers: &StringRecord) -> Result<()> {
        for required in self.columns.required() {
            if !headers.iter().any(|h| h.trim() == required) {
                return Err(MapperError::MissingColumn(required.to_string()));
            }
        }
        Ok(())
    }
}

impl Default for OutletReader {
    fn default() -> Self {
        Self::new(ColumnMapping::default())
    }
}

/// Decode UTF-8 text, dropping a leading BOM and replacing malformed sequences.
pub fn decode_text(bytes: &[u8]) -> String {
    let (text, _, had_errors) = encoding_rs::UTF_8.decode(bytes);
    if had_errors {
        warn!("Input contained invalid UTF-8 sequences; replaced with U+FFFD");
    }
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Business Name,Simplified Market Segment (GFC2),Longitude,Latitude,\
                          Main address,Address 2,Address 3,Postal code,City";

    #[test]
    fn test_parse_text_maps_headers_to_fields() {
        let text = format!(
            "{}\nLe Cafe,Bar,\"2,35\",\"48,85\",1 rue de Rivoli,,,75001,Paris\n",
            HEADER
        );
        let records = OutletReader::default().parse_text(&text).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("Business Name"), Some("Le Cafe"));
        assert_eq!(records[0].get("Longitude"), Some("2,35"));
        assert_eq!(records[0].get("Address 2"), Some(""));
        assert_eq!(records[0].get("City"), Some("Paris"));
    }

    #[test]
    fn test_short_rows_are_kept() {
        let text = format!("{}\nShort,Bar,2.3\n", HEADER);
        let records = OutletReader::default().parse_text(&text).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("Latitude"), None);
    }

    #[test]
    fn test_missing_required_column() {
        let text = "Business Name,Longitude,Latitude\nA,1,2\n";
        let err = OutletReader::default().parse_text(text).unwrap_err();
        assert!(matches!(
            err,
            MapperError::MissingColumn(c) if c == "Simplified Market Segment (GFC2)"
        ));
    }

    #[test]
    fn test_bom_and_semicolon_delimiter() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(HEADER.replace(',', ";").as_bytes());
        bytes.extend_from_slice(b"\nCaf\xC3\xA9;Retail;2,1;46,2;;;;;Lyon\n");

        let records = OutletReader::default()
            .with_delimiter(b';')
            .parse_bytes(&bytes)
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("Business Name"), Some("Café"));
        assert_eq!(records[0].get("Longitude"), Some("2,1"));
    }

    #[tokio::test]
    async fn test_fetch_records_from_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{}", HEADER)?;
        writeln!(file, "A,Bar,2.1,46.2,,,,,")?;
        writeln!(file, "B,Retail,abc,46.2,,,,,")?;

        let source = DataSource::from(file.path());
        let records = OutletReader::default().fetch_records(&source).await?;

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("Longitude"), Some("abc"));
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_missing_file_is_error() {
        let source = DataSource::File(PathBuf::from("/nonexistent/data.csv"));
        assert!(OutletReader::default().fetch_records(&source).await.is_err());
    }
}
