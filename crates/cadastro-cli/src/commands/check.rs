//! Check command implementation.

use cadastro_documents::inspect;
use tracing::{debug, info};

use crate::input;
use crate::output;

pub fn run(
    input: Option<String>,
    json: bool,
    strict: bool,
    max_lines: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = input::read_source(input.as_deref())?;

    if !json {
        output::print_table_header();
    }

    let mut checked = 0usize;
    let mut invalid = 0usize;
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(max) = max_lines {
            if checked >= max {
                debug!(max, "line limit reached");
                break;
            }
        }

        let report = inspect(line);
        if !report.is_valid() {
            invalid += 1;
        }
        if json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{}", output::format_table_row(index + 1, &report));
        }
        checked += 1;
    }

    info!(checked, invalid, "check finished");
    if !json {
        println!("{}", "-".repeat(80));
        println!("{} checked, {} valid, {} invalid", checked, checked - invalid, invalid);
    }

    if strict && invalid > 0 {
        std::process::exit(1);
    }

    Ok(())
}
