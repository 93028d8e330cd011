//! Printing command results.

use serde::Serialize;

use crate::error::CliError;

/// Print a value to stdout as pretty JSON.
///
/// # Errors
///
/// Returns an error if the value cannot be encoded.
#[allow(clippy::print_stdout)]
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print text lines to stdout.
///
/// Command results go here rather than through `tracing`, so they are shown
/// whatever the log filter is.
#[allow(clippy::print_stdout)]
pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
