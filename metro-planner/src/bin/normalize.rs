//! Convert a raw line listing into canonical network records.
//!
//! Usage: `normalize [INPUT] [OUTPUT]`, defaulting to `subway.txt` and
//! `formatted_subway.txt`.

use std::error::Error;

use tracing::info;

use metro_planner::loader::normalize_file;
use metro_planner::logging;

const DEFAULT_INPUT: &str = "subway.txt";
const DEFAULT_OUTPUT: &str = "formatted_subway.txt";

fn main() -> Result<(), Box<dyn Error>> {
    logging::init()?;

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let count = normalize_file(&input, &output)?;
    info!(count, input = %input, output = %output, "Conversion complete");
    Ok(())
}
