//! Line-based console prompts

use std::io::{BufRead, Write};

use carpark_types::{Error, Result};

pub const WELCOME_BANNER: &str = "Welcome to Thash's Car Park";
pub const HOURS_PROMPT: &str = "How many hours did you stay? ";
pub const ELECTRIC_PROMPT: &str = "is your vehicle electric (y/n) ";
pub const CAR_PARK_PROMPT: &str = "which carpark did you stay at? ";
pub const CAR_PARK_NOT_FOUND: &str = "ERROR CAR PARK NOT FOUND";

/// Print `prompt` and read one line. The line terminator is stripped; other
/// whitespace is left for the caller.
pub fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str, field: &str) -> Result<String> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::UnexpectedEndOfInput(field.to_string()));
    }
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}
