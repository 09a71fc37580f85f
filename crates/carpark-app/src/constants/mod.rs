//! Built-in tariff data

pub mod tariffs;

pub use tariffs::{default_tariff, DEFAULT_TARIFF};
