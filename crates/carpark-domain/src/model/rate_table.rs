//! Car park zones and the rate table that groups them

use std::collections::HashSet;

use carpark_types::ConfigError;
use serde::{Deserialize, Serialize};

use super::VehicleRates;

/// A named set of car parks sharing one surcharge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarParkZone {
    /// Zone name (e.g., "standard", "premium")
    pub name: String,
    /// Fixed amount added to every stay in this zone
    pub surcharge: f64,
    /// Car park names, normalised
    pub car_parks: Vec<String>,
}

impl CarParkZone {
    pub fn new(name: impl Into<String>, surcharge: f64, car_parks: &[&str]) -> Self {
        Self {
            name: name.into(),
            surcharge,
            car_parks: car_parks.iter().map(|c| normalize_car_park(c)).collect(),
        }
    }

    pub fn contains(&self, normalized_name: &str) -> bool {
        self.car_parks.iter().any(|c| c == normalized_name)
    }
}

/// Immutable tariff: vehicle rates plus car park zones
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateTable {
    pub vehicle_rates: VehicleRates,
    pub zones: Vec<CarParkZone>,
}

impl RateTable {
    /// Build a validated table from external data. Car park names are
    /// normalised first.
    pub fn new(vehicle_rates: VehicleRates, zones: Vec<CarParkZone>) -> Result<Self, ConfigError> {
        if zones.is_empty() {
            return Err(ConfigError::Invalid("tariff defines no zones".to_string()));
        }
        if !vehicle_rates.electric.is_finite() || !vehicle_rates.standard.is_finite() {
            return Err(ConfigError::Invalid(
                "vehicle rates must be finite numbers".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        let mut normalized_zones = Vec::with_capacity(zones.len());
        for zone in zones {
            if !zone.surcharge.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "zone '{}' has a non-finite surcharge",
                    zone.name
                )));
            }
            let mut car_parks = Vec::with_capacity(zone.car_parks.len());
            for raw in &zone.car_parks {
                let name = normalize_car_park(raw);
                if name.is_empty() {
                    return Err(ConfigError::Invalid(format!(
                        "zone '{}' contains an empty car park name",
                        zone.name
                    )));
                }
                if !seen.insert(name.clone()) {
                    return Err(ConfigError::Invalid(format!(
                        "car park '{}' appears in more than one zone",
                        name
                    )));
                }
                car_parks.push(name);
            }
            normalized_zones.push(CarParkZone { car_parks, ..zone });
        }

        Ok(Self {
            vehicle_rates,
            zones: normalized_zones,
        })
    }

    /// Find the zone for a car park name as typed by the user
    pub fn lookup(&self, car_park: &str) -> Option<&CarParkZone> {
        let normalized = normalize_car_park(car_park);
        let zone = self.zones.iter().find(|z| z.contains(&normalized));
        if zone.is_none() {
            tracing::debug!(car_park = %normalized, "no zone matches car park");
        }
        zone
    }

    pub fn car_park_count(&self) -> usize {
        self.zones.iter().map(|z| z.car_parks.len()).sum()
    }
}

/// Case-insensitive, whitespace-trimmed form used for matching
pub fn normalize_car_park(name: &str) -> String {
    name.trim().to_lowercase()
}
