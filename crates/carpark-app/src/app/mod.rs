//! Application use cases

pub mod quote_service;

pub use quote_service::{parse_hours, quote, QuoteRequest};
