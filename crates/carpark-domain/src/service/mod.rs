//! Domain services

pub mod fee_calculator;

pub use fee_calculator::{calculate_fee_explicit, calculate_fee_from_zone, round_money};
