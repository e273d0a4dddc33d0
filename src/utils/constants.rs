/// Source column names
pub const COLUMN_NAME: &str = "Business Name";
pub const COLUMN_SEGMENT: &str = "Simplified Market Segment (GFC2)";
pub const COLUMN_LONGITUDE: &str = "Longitude";
pub const COLUMN_LATITUDE: &str = "Latitude";
pub const COLUMN_ADDRESS_MAIN: &str = "Main address";
pub const COLUMN_ADDRESS_2: &str = "Address 2";
pub const COLUMN_ADDRESS_3: &str = "Address 3";
pub const COLUMN_ZIP_CODE: &str = "Postal code";
pub const COLUMN_CITY: &str = "City";

/// File names
pub const DEFAULT_DATA_FILE: &str = "data/data.csv";
pub const DEFAULT_CONFIG_FILE: &str = "outlet-mapper.toml";
pub const DEFAULT_DELIMITER: &str = ",";

/// Environment override prefix, e.g. OUTLET_MAPPER__MAP__CLUSTER_RADIUS=30
pub const ENV_PREFIX: &str = "OUTLET_MAPPER";
pub const ENV_SEPARATOR: &str = "__";

/// Viewport defaults (metropolitan France)
pub const DEFAULT_CENTER_LON: f64 = 2.213749;
pub const DEFAULT_CENTER_LAT: f64 = 46.227638;
pub const DEFAULT_ZOOM: f64 = 5.0;
pub const FOCUS_ZOOM: f64 = 20.0;
pub const DEFAULT_TRANSITION_MS: u64 = 1000;

/// Map source clustering defaults
pub const DEFAULT_CLUSTER_RADIUS: u32 = 20;
pub const DEFAULT_CLUSTER_MAX_ZOOM: u32 = 10;
