//! Hourly rate multipliers per vehicle class

use carpark_types::VehicleClass;
use serde::{Deserialize, Serialize};

/// Rate multiplier applied to each hour of the stay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleRates {
    /// Multiplier for electric vehicles
    #[serde(default = "default_electric_rate")]
    pub electric: f64,
    /// Multiplier for everything else
    #[serde(default = "default_standard_rate")]
    pub standard: f64,
}

fn default_electric_rate() -> f64 {
    0.8
}

fn default_standard_rate() -> f64 {
    1.2
}

impl Default for VehicleRates {
    fn default() -> Self {
        Self {
            electric: default_electric_rate(),
            standard: default_standard_rate(),
        }
    }
}

impl VehicleRates {
    pub fn rate_for(&self, vehicle: VehicleClass) -> f64 {
        match vehicle {
            VehicleClass::Electric => self.electric,
            VehicleClass::Standard => self.standard,
        }
    }
}
