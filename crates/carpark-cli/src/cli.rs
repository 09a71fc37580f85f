//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use carpark_types::{OutputFormat, UnknownCarParkPolicy};

#[derive(Parser)]
#[command(name = "carpark-fee")]
#[command(author = "thash")]
#[command(version)]
#[command(about = "Parking fee calculator for London car parks")]
#[command(long_about = None)]
pub struct Cli {
    /// Runs the interactive prompt when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// TOML tariff file replacing the built-in car park table
    #[arg(long, global = true)]
    pub tariff: Option<PathBuf>,

    /// What to do with an unrecognised car park. Uses config value if not specified.
    #[arg(long, global = true, value_enum)]
    pub unknown_car_park: Option<UnknownCarParkPolicy>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer the questions interactively and get the fee
    Pay,

    /// Price a stay without prompting
    Quote {
        /// Length of stay in whole hours
        #[arg(long, allow_negative_numbers = true)]
        hours: i64,

        /// The vehicle is electric
        #[arg(long, short = 'e')]
        electric: bool,

        /// Car park name (e.g., "romford", "wimbledon")
        #[arg(long, short = 'c')]
        car_park: String,
    },

    /// List car parks, surcharges and hourly rates
    CarParks,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set the unknown car park policy
        #[arg(long, value_enum)]
        set_unknown_car_park: Option<UnknownCarParkPolicy>,

        /// Set the tariff file used by default
        #[arg(long, conflicts_with = "clear_tariff")]
        set_tariff: Option<PathBuf>,

        /// Go back to the built-in tariff
        #[arg(long)]
        clear_tariff: bool,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
