use crate::error::Result;
use crate::models::{Coordinate, Easing, TextMatchMode};
use crate::utils::constants::*;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Settings {
    #[validate(nested)]
    pub data: DataSettings,

    #[validate(nested)]
    pub columns: ColumnMapping,

    #[validate(nested)]
    pub viewport: ViewportSettings,

    #[validate(nested)]
    pub map: MapSettings,

    pub filter: FilterSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DataSettings {
    pub path: PathBuf,

    #[validate(custom(function = "validate_delimiter"))]
    pub delimiter: String,
}

/// The CSV reader splits on a single byte, so the delimiter must be one ASCII character.
fn validate_delimiter(delimiter: &str) -> std::result::Result<(), ValidationError> {
    match delimiter.as_bytes() {
        [byte] if byte.is_ascii() => Ok(()),
        _ => Err(ValidationError::new("delimiter_not_single_ascii")),
    }
}

impl DataSettings {
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter.bytes().next().unwrap_or(b',')
    }
}

/// Header names for each outlet attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ColumnMapping {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    pub segment: String,

    #[validate(length(min = 1))]
    pub longitude: String,

    #[validate(length(min = 1))]
    pub latitude: String,

    /// Joined with single spaces into the outlet address.
    pub address: Vec<String>,

    pub zip_code: String,

    pub city: String,
}

impl ColumnMapping {
    /// Columns that must appear in the header for a dataset to load.
    pub fn required(&self) -> [&str; 4] {
        [&self.name, &self.segment, &self.longitude, &self.latitude]
    }
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            name: COLUMN_NAME.to_string(),
            segment: COLUMN_SEGMENT.to_string(),
            longitude: COLUMN_LONGITUDE.to_string(),
            latitude: COLUMN_LATITUDE.to_string(),
            address: vec![
                COLUMN_ADDRESS_MAIN.to_string(),
                COLUMN_ADDRESS_2.to_string(),
                COLUMN_ADDRESS_3.to_string(),
            ],
            zip_code: COLUMN_ZIP_CODE.to_string(),
            city: COLUMN_CITY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ViewportSettings {
    #[validate(nested)]
    pub default_center: Coordinate,

    #[validate(range(min = 0.0, max = 24.0))]
    pub default_zoom: f64,

    #[validate(range(min = 0.0, max = 24.0))]
    pub focus_zoom: f64,

    pub transition_ms: u64,

    pub easing: Easing,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            default_center: Coordinate::new(DEFAULT_CENTER_LON, DEFAULT_CENTER_LAT),
            default_zoom: DEFAULT_ZOOM,
            focus_zoom: FOCUS_ZOOM,
            transition_ms: DEFAULT_TRANSITION_MS,
            easing: Easing::Linear,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MapSettings {
    pub cluster: bool,

    #[validate(range(min = 1))]
    pub cluster_radius: u32,

    #[validate(range(max = 24))]
    pub cluster_max_zoom: u32,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            cluster: true,
            cluster_radius: DEFAULT_CLUSTER_RADIUS,
            cluster_max_zoom: DEFAULT_CLUSTER_MAX_ZOOM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterSettings {
    pub text_match: TextMatchMode,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_FILE),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data: DataSettings::default(),
            columns: ColumnMapping::default(),
            viewport: ViewportSettings::default(),
            map: MapSettings::default(),
            filter: FilterSettings::default(),
        }
    }
}

impl Settings {
    /// Layer built-in defaults, a TOML file and `OUTLET_MAPPER__*` environment variables.
    ///
    /// An explicit `path` must exist; otherwise `outlet-mapper.toml` in the
    /// working directory is read when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        let settings: Settings = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn toml_file() -> std::io::Result<NamedTempFile> {
        Builder::new().suffix(".toml").tempfile()
    }

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.map.cluster_radius, 20);
        assert_eq!(settings.map.cluster_max_zoom, 10);
        assert_eq!(settings.viewport.focus_zoom, 20.0);
        assert_eq!(settings.data.delimiter_byte(), b',');
    }

    #[test]
    fn test_load_from_toml_file() -> Result<()> {
        let mut file = toml_file()?;
        writeln!(
            file,
            r#"
[data]
path = "outlets.csv"
delimiter = ";"

[map]
cluster_radius = 30

[viewport]
focus_zoom = 16.0
easing = "ease_in_out"

[filter]
text_match = "substring"
"#
        )?;

        let settings = Settings::load(Some(file.path()))?;

        assert_eq!(settings.data.path, PathBuf::from("outlets.csv"));
        assert_eq!(settings.data.delimiter_byte(), b';');
        assert_eq!(settings.map.cluster_radius, 30);
        assert_eq!(settings.map.cluster_max_zoom, 10);
        assert_eq!(settings.viewport.focus_zoom, 16.0);
        assert_eq!(settings.viewport.easing, Easing::EaseInOut);
        assert_eq!(settings.filter.text_match, TextMatchMode::Substring);
        assert_eq!(settings.columns, ColumnMapping::default());

        Ok(())
    }

    #[test]
    fn test_invalid_settings_rejected() -> Result<()> {
        let mut file = toml_file()?;
        writeln!(file, "[map]\ncluster_radius = 0")?;

        assert!(Settings::load(Some(file.path())).is_err());
        Ok(())
    }

    #[test]
    fn test_delimiter_must_be_single_ascii() {
        let mut settings = Settings::default();
        settings.data.delimiter = "é".to_string();
        assert!(settings.validate().is_err());

        settings.data.delimiter = ";;".to_string();
        assert!(settings.validate().is_err());

        settings.data.delimiter = String::new();
        assert!(settings.validate().is_err());

        settings.data.delimiter = "\t".to_string();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.data.delimiter_byte(), b'\t');
    }

    #[test]
    fn test_non_ascii_delimiter_in_file_rejected() -> Result<()> {
        let mut file = toml_file()?;
        writeln!(file, "[data]\ndelimiter = \"é\"")?;

        assert!(Settings::load(Some(file.path())).is_err());
        Ok(())
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        assert!(Settings::load(Some(Path::new("/nonexistent/outlet-mapper.toml"))).is_err());
    }
}
