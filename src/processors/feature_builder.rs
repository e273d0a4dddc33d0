use crate::models::{Coordinate, FeatureCollection, OutletFeature, OutletProperties, RawRecord};
use crate::settings::ColumnMapping;
use crate::utils::coordinates::{parse_coordinate, validate_coordinates};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    MissingLongitude,
    MissingLatitude,
    InvalidLongitude(String),
    InvalidLatitude(String),
    OutOfBounds(Coordinate),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MissingLongitude => write!(f, "missing longitude"),
            SkipReason::MissingLatitude => write!(f, "missing latitude"),
            SkipReason::InvalidLongitude(v) => write!(f, "unparseable longitude '{}'", v),
            SkipReason::InvalidLatitude(v) => write!(f, "unparseable latitude '{}'", v),
            SkipReason::OutOfBounds(c) => {
                write!(f, "position [{}, {}] out of bounds", c.longitude, c.latitude)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based data row, header excluded
    pub row: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildReport {
    pub total_rows: usize,
    pub features_built: usize,
    pub skipped: Vec<SkippedRow>,
}

impl BuildReport {
    pub fn skipped_rows(&self) -> usize {
        self.skipped.len()
    }

    pub fn summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Import Summary:\n");
        summary.push_str(&format!("  Rows read: {}\n", self.total_rows));
        summary.push_str(&format!("  Features built: {}\n", self.features_built));
        summary.push_str(&format!("  Rows skipped: {}\n", self.skipped_rows()));

        for skipped in self.skipped.iter().take(5) {
            summary.push_str(&format!("    row {}: {}\n", skipped.row, skipped.reason));
        }
        if self.skipped.len() > 5 {
            summary.push_str(&format!("    ... and {} more\n", self.skipped.len() - 5));
        }

        summary
    }
}

/// Turns raw rows into point features.
///
/// Rows without a usable position are dropped. This is a cleaning rule, not a
/// failure: nothing is returned as an error and the rest of the table is kept
/// in source order.
pub struct FeatureBuilder {
    columns: ColumnMapping,
}

impl FeatureBuilder {
    pub fn new(columns: ColumnMapping) -> Self {
        Self { columns }
    }

    pub fn build(&self, records: &[RawRecord]) -> FeatureCollection {
        self.build_with_report(records).0
    }

    pub fn build_with_report(&self, records: &[RawRecord]) -> (FeatureCollection, BuildReport) {
        let mut features = Vec::with_capacity(records.len());
        let mut report = BuildReport {
            total_rows: records.len(),
            ..Default::default()
        };

        for (index, record) in records.iter().enumerate() {
            match self.build_feature(record) {
                Ok(feature) => features.push(feature),
                Err(reason) => {
                    debug!(row = index + 1, %reason, "Skipping outlet row");
                    report.skipped.push(SkippedRow {
                        row: index + 1,
                        reason,
                    });
                }
            }
        }

        report.features_built = features.len();
        (FeatureCollection::new(features), report)
    }

    pub fn build_feature(&self, record: &RawRecord) -> Result<OutletFeature, SkipReason> {
        let coordinate = self.read_position(record)?;

        let properties = OutletProperties {
            name: record.get_or_empty(&self.columns.name).to_string(),
            simplified_market_segment: record.get_or_empty(&self.columns.segment).to_string(),
            address: self.compose_address(record),
            zip_code: record.get_or_empty(&self.columns.zip_code).to_string(),
            city: record.get_or_empty(&self.columns.city).to_string(),
        };

        Ok(OutletFeature::new(coordinate, properties))
    }

    fn read_position(&self, record: &RawRecord) -> Result<Coordinate, SkipReason> {
        let raw_lon = record
            .get(&self.columns.longitude)
            .ok_or(SkipReason::MissingLongitude)?;
        let raw_lat = record
            .get(&self.columns.latitude)
            .ok_or(SkipReason::MissingLatitude)?;

        let longitude = parse_coordinate(raw_lon)
            .map_err(|_| SkipReason::InvalidLongitude(raw_lon.to_string()))?;
        let latitude = parse_coordinate(raw_lat)
            .map_err(|_| SkipReason::InvalidLatitude(raw_lat.to_string()))?;

        let coordinate = Coordinate::new(longitude, latitude);
        validate_coordinates(&coordinate).map_err(|_| SkipReason::OutOfBounds(coordinate))?;
        Ok(coordinate)
    }

    fn compose_address(&self, record: &RawRecord) -> String {
        self.columns
            .address
            .iter()
            .map(|column| record.get_or_empty(column))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for FeatureBuilder {
    fn default() -> Self {
        Self::new(ColumnMapping::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(lon: &str, lat: &str) -> RawRecord {
        [
            ("Business Name", "Le Cafe"),
            ("Simplified Market Segment (GFC2)", "Bar"),
            ("Longitude", lon),
            ("Latitude", lat),
            ("Main address", "1 rue de Rivoli"),
            ("Address 2", ""),
            ("Address 3", "Bat. B"),
            ("Postal code", "75001"),
            ("City", "Paris"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_non_numeric_coordinates_are_dropped() {
        let builder = FeatureBuilder::default();

        assert!(builder.build(&[record("abc", "1.0")]).is_empty());
        assert!(builder.build(&[record("1.0", "")]).is_empty());
        assert!(builder.build(&[record("", "")]).is_empty());
        assert!(builder.build(&[record("NaN", "1.0")]).is_empty());
    }

    #[test]
    fn test_comma_decimal_equivalent_to_dot() {
        let builder = FeatureBuilder::default();
        assert_eq!(
            builder.build(&[record("2,21", "46,22")]),
            builder.build(&[record("2.21", "46.22")])
        );
    }

    #[test]
    fn test_properties_copied() {
        let collection = FeatureBuilder::default().build(&[record("2.35", "48.85")]);
        let feature = collection.get(0).unwrap();

        assert_eq!(feature.coordinate(), Coordinate::new(2.35, 48.85));
        assert_eq!(feature.name(), "Le Cafe");
        assert_eq!(feature.segment(), "Bar");
        assert_eq!(feature.properties.address, "1 rue de Rivoli  Bat. B");
        assert_eq!(feature.properties.zip_code, "75001");
        assert_eq!(feature.properties.city, "Paris");
    }

    #[test]
    fn test_order_preserved_and_report() {
        let mut first = record("1.0", "1.0");
        first.insert("Business Name", "first");
        let mut last = record("3.0", "3.0");
        last.insert("Business Name", "last");
        let records = vec![first, record("x", "2.0"), record("200", "2.0"), last];

        let (collection, report) = FeatureBuilder::default().build_with_report(&records);

        let names: Vec<&str> = collection.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["first", "last"]);
        assert_eq!(report.total_rows, 4);
        assert_eq!(report.features_built, 2);
        assert_eq!(report.skipped_rows(), 2);
        assert_eq!(report.skipped[0].row, 2);
        assert_eq!(
            report.skipped[0].reason,
            SkipReason::InvalidLongitude("x".to_string())
        );
        assert!(matches!(report.skipped[1].reason, SkipReason::OutOfBounds(_)));
        assert!(report.summary().contains("Rows skipped: 2"));
    }

    #[test]
    fn test_missing_optional_columns_are_empty() {
        let minimal: RawRecord = [
            ("Business Name", "Kiosk"),
            ("Simplified Market Segment (GFC2)", "Retail"),
            ("Longitude", "2.0"),
            ("Latitude", "46.0"),
        ]
        .into_iter()
        .collect();

        let collection = FeatureBuilder::default().build(&[minimal]);
        let feature = collection.get(0).unwrap();
        assert_eq!(feature.properties.address, "  ");
        assert_eq!(feature.properties.city, "");
    }

    #[test]
    fn test_address_parts_joined_verbatim() {
        let mut padded = record("2.35", "48.85");
        padded.insert("Main address", " 1 rue X");
        padded.insert("Address 3", "Bat B");

        let collection = FeatureBuilder::default().build(&[padded]);
        let feature = collection.get(0).unwrap();
        assert_eq!(feature.properties.address, " 1 rue X  Bat B");
    }

    #[test]
    fn test_missing_coordinate_column_is_skipped() {
        let no_lat: RawRecord = [("Business Name", "Kiosk"), ("Longitude", "2.0")]
            .into_iter()
            .collect();

        let (collection, report) = FeatureBuilder::default().build_with_report(&[no_lat]);
        assert!(collection.is_empty());
        assert_eq!(report.skipped[0].reason, SkipReason::MissingLatitude);
    }
}
