//! Application service layer - tariffs, config, quoting

pub mod app;
pub mod config;
pub mod constants;
pub mod tariff_loader;
