use crate::errors::AppResult;
use serde::Serialize;

/// Print a report as JSON on stdout: compact by default, indented with
/// `--pretty`.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
