use crate::error::{MapperError, Result};
use crate::models::Coordinate;
use validator::Validate;

/// Replace the first decimal comma with a decimal point: `"2,21"` -> `"2.21"`
pub fn normalize_decimal(value: &str) -> String {
    value.trim().replacen(',', ".", 1)
}

/// Parse a decimal coordinate that may use either `.` or `,` as separator.
///
/// # Examples
/// ```
/// use outlet_mapper::utils::parse_coordinate;
///
/// assert_eq!(parse_coordinate("46,227638").unwrap(), 46.227638);
/// assert!(parse_coordinate("abc").is_err());
/// ```
pub fn parse_coordinate(value: &str) -> Result<f64> {
    let normalized = normalize_decimal(value);
    let parsed = normalized.parse::<f64>().map_err(|_| {
        MapperError::InvalidCoordinate(format!("Invalid coordinate value: '{}'", value))
    })?;

    if !parsed.is_finite() {
        return Err(MapperError::InvalidCoordinate(format!(
            "Coordinate value is not finite: '{}'",
            value
        )));
    }

    Ok(parsed)
}

pub fn validate_coordinates(coordinate: &Coordinate) -> Result<()> {
    coordinate.validate().map_err(|_| {
        MapperError::InvalidCoordinate(format!(
            "Position [{}, {}] is outside bounds [-180, 180] x [-90, 90]",
            coordinate.longitude, coordinate.latitude
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_decimal() {
        assert_eq!(normalize_decimal("2,213749"), "2.213749");
        assert_eq!(normalize_decimal(" 46.22 "), "46.22");
        // Only the first separator is rewritten
        assert_eq!(normalize_decimal("1,000,5"), "1.000,5");
    }

    #[test]
    fn test_parse_coordinate() {
        assert!((parse_coordinate("2.21").unwrap() - 2.21).abs() < 1e-12);
        assert_eq!(parse_coordinate("2,21").unwrap(), parse_coordinate("2.21").unwrap());
        assert!((parse_coordinate("-0,1278").unwrap() - -0.1278).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_coordinates() {
        assert!(parse_coordinate("").is_err());
        assert!(parse_coordinate("abc").is_err());
        assert!(parse_coordinate("NaN").is_err());
        assert!(parse_coordinate("inf").is_err());
        assert!(parse_coordinate("1,000,5").is_err());
    }

    #[test]
    fn test_validate_coordinates_bounds() {
        assert!(validate_coordinates(&Coordinate::new(2.213749, 46.227638)).is_ok());
        assert!(validate_coordinates(&Coordinate::new(-180.0, 90.0)).is_ok());
        assert!(validate_coordinates(&Coordinate::new(200.0, 46.0)).is_err());
        assert!(validate_coordinates(&Coordinate::new(2.0, -95.0)).is_err());
    }
}
