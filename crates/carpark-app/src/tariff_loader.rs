//! Tariff loader for TOML tariff files

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use carpark_domain::model::{CarParkZone, RateTable, VehicleRates};
use carpark_types::{ConfigError, Error, Result};
use serde::Deserialize;

use crate::constants::DEFAULT_TARIFF;

/// Container for parsing tariff.toml
#[derive(Debug, Deserialize)]
struct TariffFile {
    #[serde(default)]
    vehicle_rates: VehicleRates,
    #[serde(default)]
    zones: Vec<CarParkZone>,
}

/// Load a tariff from a TOML file
pub fn load_tariff_from_file(path: &Path) -> Result<RateTable> {
    if !path.exists() {
        return Err(Error::FileNotFound(format!(
            "Tariff file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to read tariff file: {}",
            e
        )))
    })?;

    let table = load_tariff_from_str(&content)?;
    tracing::info!(
        path = %path.display(),
        zones = table.zones.len(),
        car_parks = table.car_park_count(),
        "loaded tariff file"
    );
    Ok(table)
}

/// Load a tariff from a TOML string
pub fn load_tariff_from_str(toml_content: &str) -> Result<RateTable> {
    let file: TariffFile = toml::from_str(toml_content).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to parse tariff TOML: {}",
            e
        )))
    })?;

    Ok(RateTable::new(file.vehicle_rates, file.zones)?)
}

/// Tariff file if one is given, otherwise the built-in table
pub fn resolve_tariff(path: Option<&Path>) -> Result<Cow<'static, RateTable>> {
    match path {
        Some(path) => load_tariff_from_file(path).map(Cow::Owned),
        None => {
            tracing::debug!("using built-in tariff");
            Ok(Cow::Borrowed(&*DEFAULT_TARIFF))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TEST_TOML: &str = r#"
[vehicle_rates]
electric = 0.5
standard = 1.5

[[zones]]
name = "city"
surcharge = 3.0
car_parks = ["Soho", "holborn"]

[[zones]]
name = "suburb"
surcharge = 0.5
car_parks = ["barnet"]
"#;

    #[test]
    fn test_load_from_str() {
        let table = load_tariff_from_str(TEST_TOML).unwrap();
        assert_eq!(table.zones.len(), 2);
        assert_eq!(table.car_park_count(), 3);
        assert_eq!(table.vehicle_rates.electric, 0.5);
        assert_eq!(table.lookup("soho").unwrap().surcharge, 3.0);
        assert_eq!(table.lookup(" BARNET ").unwrap().name, "suburb");
    }

    #[test]
    fn test_missing_vehicle_rates_use_defaults() {
        let toml = r#"
[[zones]]
name = "only"
surcharge = 1.0
car_parks = ["enfield"]
"#;
        let table = load_tariff_from_str(toml).unwrap();
        assert_eq!(table.vehicle_rates, VehicleRates::default());
    }

    #[test]
    fn test_no_zones_is_invalid() {
        let result = load_tariff_from_str("[vehicle_rates]\nelectric = 0.8\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Invalid(_)))));
    }

    #[test]
    fn test_duplicate_car_park_is_invalid() {
        let toml = r#"
[[zones]]
name = "a"
surcharge = 1.0
car_parks = ["enfield"]

[[zones]]
name = "b"
surcharge = 2.5
car_parks = ["Enfield"]
"#;
        let result = load_tariff_from_str(toml);
        assert!(matches!(result, Err(Error::Config(ConfigError::Invalid(_)))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = load_tariff_from_str("zones = [");
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TEST_TOML.as_bytes()).unwrap();
        let table = load_tariff_from_file(file.path()).unwrap();
        assert!(table.lookup("holborn").is_some());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_tariff_from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }

    #[test]
    fn test_resolve_defaults_to_builtin() {
        let tariff = resolve_tariff(None).unwrap();
        assert!(matches!(tariff, Cow::Borrowed(_)));
        assert!(tariff.lookup("romford").is_some());
    }
}
