//! Quote Service - prices a single stay
//!
//! 1. Resolve the hourly rate for the vehicle class
//! 2. Resolve the car park to a zone surcharge
//! 3. Apply the unknown car park policy when no zone matches
//! 4. Calculate the fee using domain services

use carpark_domain::model::{normalize_car_park, RateTable};
use carpark_domain::service::fee_calculator::{calculate_fee_explicit, calculate_fee_from_zone};
use carpark_types::{Error, FeeQuote, Result, UnknownCarParkPolicy, VehicleClass};

/// Inputs for one quote, as gathered from the user
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    pub hours: i64,
    pub vehicle: VehicleClass,
    /// Raw car park name; matching is case-insensitive
    pub car_park: String,
}

impl QuoteRequest {
    pub fn new(hours: i64, vehicle: VehicleClass, car_park: impl Into<String>) -> Self {
        Self {
            hours,
            vehicle,
            car_park: car_park.into(),
        }
    }
}

/// Parse a stay duration in whole hours. Negative values are accepted.
pub fn parse_hours(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidHours(raw.trim().to_string()))
}

pub fn quote(
    request: &QuoteRequest,
    tariff: &RateTable,
    policy: UnknownCarParkPolicy,
) -> Result<FeeQuote> {
    let vehicle_rate = tariff.vehicle_rates.rate_for(request.vehicle);
    let car_park = normalize_car_park(&request.car_park);
    let hours = request.hours as f64;

    let (zone, surcharge, fee) = match tariff.lookup(&car_park) {
        Some(zone) => (
            Some(zone.name.clone()),
            zone.surcharge,
            calculate_fee_from_zone(hours, vehicle_rate, zone),
        ),
        None => match policy {
            UnknownCarParkPolicy::Reject => return Err(Error::CarParkNotFound(car_park)),
            UnknownCarParkPolicy::ZeroSurcharge => {
                tracing::warn!(car_park = %car_park, "unknown car park, charging without surcharge");
                (None, 0.0, calculate_fee_explicit(hours, vehicle_rate, 0.0))
            }
        },
    };

    tracing::debug!(
        hours = request.hours,
        vehicle = %request.vehicle,
        vehicle_rate,
        surcharge,
        fee = fee.amount(),
        "quoted stay"
    );

    Ok(FeeQuote {
        hours: request.hours,
        vehicle: request.vehicle,
        car_park,
        zone,
        vehicle_rate,
        surcharge,
        fee,
    })
}
