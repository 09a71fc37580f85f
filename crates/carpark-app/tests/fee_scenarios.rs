//! End-to-end fee scenarios through the application layer

use std::io::Write;

use carpark_app::app::{parse_hours, quote, QuoteRequest};
use carpark_app::tariff_loader::resolve_tariff;
use carpark_types::{Error, UnknownCarParkPolicy, VehicleClass};

fn quote_answers(hours: &str, electric: &str, car_park: &str) -> carpark_types::Result<carpark_types::FeeQuote> {
    let tariff = resolve_tariff(None)?;
    let request = QuoteRequest::new(
        parse_hours(hours)?,
        VehicleClass::from_answer(electric),
        car_park,
    );
    quote(&request, &tariff, UnknownCarParkPolicy::Reject)
}

#[test]
fn test_romford_non_electric() {
    let quote = quote_answers("3", "n", "romford").unwrap();
    assert_eq!(quote.vehicle_rate, 1.2);
    assert_eq!(quote.surcharge, 1.0);
    assert_eq!(format!("Please Pay: £ {}", quote.fee), "Please Pay: £ 4.6");
}

#[test]
fn test_bradford_electric() {
    let quote = quote_answers("5", "y", "bradford").unwrap();
    assert_eq!(quote.vehicle_rate, 0.8);
    assert_eq!(quote.surcharge, 2.5);
    assert!((quote.fee.amount() - 6.5).abs() < 1e-9);
}

#[test]
fn test_answer_variants() {
    let quote = quote_answers("1", " Y ", "  ENFIELD ").unwrap();
    assert_eq!(quote.vehicle, VehicleClass::Electric);
    assert_eq!(quote.zone.as_deref(), Some("standard"));

    let quote = quote_answers("1", "no", "Wimbledon").unwrap();
    assert_eq!(quote.vehicle, VehicleClass::Standard);
    assert_eq!(quote.surcharge, 2.5);
}

#[test]
fn test_unknown_car_park() {
    let result = quote_answers("2", "n", "unknown");
    assert!(matches!(result, Err(Error::CarParkNotFound(_))));
}

#[test]
fn test_non_numeric_hours() {
    let result = quote_answers("lots", "n", "romford");
    assert!(matches!(result, Err(Error::InvalidHours(_))));
}

#[test]
fn test_custom_tariff_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[vehicle_rates]
electric = 1.0
standard = 2.0

[[zones]]
name = "airport"
surcharge = 10.0
car_parks = ["heathrow"]
"#
    )
    .unwrap();

    let tariff = resolve_tariff(Some(file.path())).unwrap();
    let request = QuoteRequest::new(4, VehicleClass::Standard, "Heathrow");
    let quote = quote(&request, &tariff, UnknownCarParkPolicy::Reject).unwrap();
    assert_eq!(quote.fee.to_string(), "18.0");

    // Built-in car parks are not part of a replacement tariff
    let request = QuoteRequest::new(4, VehicleClass::Standard, "romford");
    assert!(quote_is_rejected(&request, &tariff));
}

fn quote_is_rejected(request: &QuoteRequest, tariff: &carpark_domain::model::RateTable) -> bool {
    matches!(
        quote(request, tariff, UnknownCarParkPolicy::Reject),
        Err(Error::CarParkNotFound(_))
    )
}
