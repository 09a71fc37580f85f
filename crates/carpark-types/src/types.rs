//! Value types shared by every layer

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fuel-type classification used to pick the hourly rate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    Electric,
    Standard,
}

impl VehicleClass {
    /// Interpret a y/n answer. Only "y" (any case, surrounding whitespace
    /// ignored) means electric.
    pub fn from_answer(answer: &str) -> Self {
        if answer.trim().eq_ignore_ascii_case("y") {
            VehicleClass::Electric
        } else {
            VehicleClass::Standard
        }
    }

    pub fn from_electric(is_electric: bool) -> Self {
        if is_electric {
            VehicleClass::Electric
        } else {
            VehicleClass::Standard
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleClass::Electric => "electric",
            VehicleClass::Standard => "non-electric",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A charge already rounded to pence
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fee(f64);

impl Fee {
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Fee {
    /// Shortest decimal form, always with a fractional part (`4.6`, `5.0`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.0.to_string();
        if text.contains('.') || !self.0.is_finite() {
            f.write_str(&text)
        } else {
            write!(f, "{}.0", text)
        }
    }
}

/// What to do when the car park name matches no zone
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownCarParkPolicy {
    /// Report the error and charge nothing
    #[default]
    Reject,
    /// Report the error and charge hours only
    ZeroSurcharge,
}

impl fmt::Display for UnknownCarParkPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownCarParkPolicy::Reject => write!(f, "reject"),
            UnknownCarParkPolicy::ZeroSurcharge => write!(f, "zero-surcharge"),
        }
    }
}

/// Result of pricing a single stay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeQuote {
    pub hours: i64,
    pub vehicle: VehicleClass,
    /// Car park name as entered, normalised
    pub car_park: String,
    /// Zone the car park belongs to; `None` when the zero-surcharge fallback applied
    pub zone: Option<String>,
    pub vehicle_rate: f64,
    pub surcharge: f64,
    pub fee: Fee,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_answer_variants() {
        assert_eq!(VehicleClass::from_answer("y"), VehicleClass::Electric);
        assert_eq!(VehicleClass::from_answer("Y"), VehicleClass::Electric);
        assert_eq!(VehicleClass::from_answer(" y \n"), VehicleClass::Electric);
        assert_eq!(VehicleClass::from_answer("n"), VehicleClass::Standard);
        assert_eq!(VehicleClass::from_answer("yes"), VehicleClass::Standard);
        assert_eq!(VehicleClass::from_answer(""), VehicleClass::Standard);
    }

    #[test]
    fn test_fee_display_keeps_one_decimal() {
        assert_eq!(Fee::new(4.6).to_string(), "4.6");
        assert_eq!(Fee::new(6.5).to_string(), "6.5");
        assert_eq!(Fee::new(5.0).to_string(), "5.0");
        assert_eq!(Fee::new(12.34).to_string(), "12.34");
        assert_eq!(Fee::new(-1.4).to_string(), "-1.4");
    }

    #[test]
    fn test_fee_serializes_as_number() {
        let json = serde_json::to_string(&Fee::new(6.5)).unwrap();
        assert_eq!(json, "6.5");
    }

    #[test]
    fn test_policy_serde_names() {
        let json = serde_json::to_string(&UnknownCarParkPolicy::ZeroSurcharge).unwrap();
        assert_eq!(json, "\"zero-surcharge\"");
        let policy: UnknownCarParkPolicy = serde_json::from_str("\"reject\"").unwrap();
        assert_eq!(policy, UnknownCarParkPolicy::Reject);
    }
}
