//! Command handlers

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use carpark_app::app::{parse_hours, quote, QuoteRequest};
use carpark_app::config::Config;
use carpark_app::tariff_loader::resolve_tariff;
use carpark_domain::model::RateTable;
use carpark_types::{Error, Result, VehicleClass};

use crate::cli::{Cli, Commands, OutputFormat, UnknownCarParkPolicy};
use crate::output::{output_payment, output_quote, output_tariff};
use crate::prompt::{
    ask, CAR_PARK_NOT_FOUND, CAR_PARK_PROMPT, ELECTRIC_PROMPT, HOURS_PROMPT, WELCOME_BANNER,
};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref tariff) = cli.tariff {
        config.tariff_path = Some(tariff.clone());
    }
    if let Some(policy) = cli.unknown_car_park {
        config.unknown_car_park = policy;
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        None | Some(Commands::Pay) => cmd_pay(&config, output_format),

        Some(Commands::Quote {
            hours,
            electric,
            car_park,
        }) => cmd_quote(
            &config,
            QuoteRequest::new(hours, VehicleClass::from_electric(electric), car_park),
            output_format,
        ),

        Some(Commands::CarParks) => cmd_car_parks(&config, output_format),

        Some(Commands::Config {
            show,
            set_output,
            set_unknown_car_park,
            set_tariff,
            clear_tariff,
            reset,
        }) => cmd_config(
            show,
            set_output,
            set_unknown_car_park,
            set_tariff,
            clear_tariff,
            reset,
        ),
    }
}

fn cmd_pay(config: &Config, output_format: OutputFormat) -> Result<()> {
    let tariff = resolve_tariff(config.tariff_path.as_deref())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    pay_session(
        &mut stdin.lock(),
        &mut stdout.lock(),
        &tariff,
        config.unknown_car_park,
        output_format,
    )
}

/// Interactive flow: banner, three questions, then the fee.
///
/// An unknown car park prints the not-found message and still succeeds.
fn pay_session<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    tariff: &RateTable,
    policy: UnknownCarParkPolicy,
    output_format: OutputFormat,
) -> Result<()> {
    writeln!(out, "{}", WELCOME_BANNER)?;

    let hours = parse_hours(&ask(input, out, HOURS_PROMPT, "hours")?)?;
    let vehicle = VehicleClass::from_answer(&ask(input, out, ELECTRIC_PROMPT, "vehicle type")?);
    let car_park = ask(input, out, CAR_PARK_PROMPT, "car park")?;

    let request = QuoteRequest::new(hours, vehicle, car_park);
    match quote(&request, tariff, policy) {
        Ok(fee_quote) => {
            if fee_quote.zone.is_none() {
                writeln!(out, "{}", CAR_PARK_NOT_FOUND)?;
            }
            output_payment(out, output_format, &fee_quote)
        }
        Err(Error::CarParkNotFound(name)) => {
            tracing::info!(car_park = %name, "no fee issued for unknown car park");
            writeln!(out, "{}", CAR_PARK_NOT_FOUND)?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn cmd_quote(config: &Config, request: QuoteRequest, output_format: OutputFormat) -> Result<()> {
    let tariff = resolve_tariff(config.tariff_path.as_deref())?;
    let fee_quote = quote(&request, &tariff, config.unknown_car_park)?;

    if fee_quote.zone.is_none() {
        eprintln!("{}", CAR_PARK_NOT_FOUND);
    }

    let stdout = io::stdout();
    output_quote(&mut stdout.lock(), output_format, &fee_quote)
}

fn cmd_car_parks(config: &Config, output_format: OutputFormat) -> Result<()> {
    let tariff = resolve_tariff(config.tariff_path.as_deref())?;
    let stdout = io::stdout();
    output_tariff(&mut stdout.lock(), output_format, &tariff)
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_unknown_car_park: Option<UnknownCarParkPolicy>,
    set_tariff: Option<PathBuf>,
    clear_tariff: bool,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let modified = apply_config_changes(
        &mut config,
        set_output,
        set_unknown_car_park,
        set_tariff,
        clear_tariff,
    )?;

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

/// Returns whether anything changed
fn apply_config_changes(
    config: &mut Config,
    set_output: Option<OutputFormat>,
    set_unknown_car_park: Option<UnknownCarParkPolicy>,
    set_tariff: Option<PathBuf>,
    clear_tariff: bool,
) -> Result<bool> {
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(policy) = set_unknown_car_park {
        config.unknown_car_park = policy;
        modified = true;
    }

    if let Some(path) = set_tariff {
        // Tariff must load before it is stored
        resolve_tariff(Some(path.as_path()))?;
        config.tariff_path = Some(path);
        modified = true;
    }

    if clear_tariff {
        config.tariff_path = None;
        modified = true;
    }

    Ok(modified)
}
