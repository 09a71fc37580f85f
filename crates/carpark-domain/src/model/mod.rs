//! Domain model types

pub mod rate_table;
pub mod vehicle_rates;

pub use rate_table::{normalize_car_park, CarParkZone, RateTable};
pub use vehicle_rates::VehicleRates;
