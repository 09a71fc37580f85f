//! Fee calculation functions
//!
//! fee = hours x vehicle_rate + surcharge, rounded to pence

use carpark_types::Fee;

use crate::model::CarParkZone;

/// Round half away from zero at the second decimal place
pub fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn calculate_fee_explicit(hours: f64, vehicle_rate: f64, surcharge: f64) -> Fee {
    Fee::new(round_money(hours * vehicle_rate + surcharge))
}

pub fn calculate_fee_from_zone(hours: f64, vehicle_rate: f64, zone: &CarParkZone) -> Fee {
    calculate_fee_explicit(hours, vehicle_rate, zone.surcharge)
}
