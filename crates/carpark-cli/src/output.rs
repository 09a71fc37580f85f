//! Output formatting module

use std::io::Write;

use carpark_domain::model::RateTable;
use carpark_types::{Fee, FeeQuote, OutputFormat, Result};

/// The single line the interactive flow ends with
pub fn payment_line(quote: &FeeQuote) -> String {
    format!("Please Pay: £ {}", quote.fee)
}

pub fn output_payment<W: Write>(out: &mut W, output_format: OutputFormat, quote: &FeeQuote) -> Result<()> {
    match output_format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(quote)?)?,
        OutputFormat::Table => writeln!(out, "{}", payment_line(quote))?,
    }
    Ok(())
}

/// Quote with its rate breakdown
pub fn output_quote<W: Write>(out: &mut W, output_format: OutputFormat, quote: &FeeQuote) -> Result<()> {
    if output_format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(quote)?)?;
        return Ok(());
    }

    writeln!(out, "Parking Quote")?;
    writeln!(out, "=============")?;
    writeln!(out, "Hours:        {}", quote.hours)?;
    writeln!(out, "Vehicle:      {} (x{})", quote.vehicle, quote.vehicle_rate)?;
    match quote.zone {
        Some(ref zone) => writeln!(
            out,
            "Car park:     {} ({} zone, +{})",
            quote.car_park, zone, Fee::new(quote.surcharge)
        )?,
        None => writeln!(out, "Car park:     {} (not found, no surcharge)", quote.car_park)?,
    }
    writeln!(out, "-------------------------")?;
    writeln!(out, "{}", payment_line(quote))?;
    Ok(())
}

pub fn output_tariff<W: Write>(out: &mut W, output_format: OutputFormat, tariff: &RateTable) -> Result<()> {
    if output_format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(tariff)?)?;
        return Ok(());
    }

    writeln!(out, "Car Park Tariff")?;
    writeln!(out, "===============")?;
    writeln!(out, "Electric:      x{} per hour", tariff.vehicle_rates.electric)?;
    writeln!(out, "Non-electric:  x{} per hour", tariff.vehicle_rates.standard)?;

    for zone in &tariff.zones {
        writeln!(out)?;
        writeln!(out, "{} (+{})", zone.name, Fee::new(zone.surcharge))?;
        for car_park in &zone.car_parks {
            writeln!(out, "  {}", car_park)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{} car parks in {} zones", tariff.car_park_count(), tariff.zones.len())?;
    Ok(())
}
