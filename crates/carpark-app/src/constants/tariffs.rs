//! Built-in tariff for the London car parks

use std::sync::LazyLock;

use carpark_domain::model::{CarParkZone, RateTable, VehicleRates};

pub const STANDARD_ZONE: &str = "standard";
pub const PREMIUM_ZONE: &str = "premium";

pub const STANDARD_SURCHARGE: f64 = 1.0;
pub const PREMIUM_SURCHARGE: f64 = 2.5;

pub const STANDARD_CAR_PARKS: [&str; 5] = ["enfield", "walthamstow", "greenpark", "romford", "tooting"];
pub const PREMIUM_CAR_PARKS: [&str; 5] = ["wimbledon", "westminister", "chingford", "bradford", "hornchurch"];

/// Tariff used when no tariff file is configured
pub static DEFAULT_TARIFF: LazyLock<RateTable> = LazyLock::new(default_tariff);

pub fn default_tariff() -> RateTable {
    RateTable {
        vehicle_rates: VehicleRates::default(),
        zones: vec![
            CarParkZone::new(STANDARD_ZONE, STANDARD_SURCHARGE, &STANDARD_CAR_PARKS),
            CarParkZone::new(PREMIUM_ZONE, PREMIUM_SURCHARGE, &PREMIUM_CAR_PARKS),
        ],
    }
}
