//! Domain layer for carpark-fee
//!
//! Holds the tariff model and the fee calculator. Nothing here touches the
//! console or the filesystem.

pub mod model;
pub mod service;
