//! Scan command implementation.

use cadastro_documents::scan;
use tracing::info;

use crate::input;

pub fn run(
    input: Option<String>,
    json: bool,
    valid_only: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = input::read_source(input.as_deref())?;

    let found: Vec<_> = scan(&text)
        .into_iter()
        .filter(|m| !valid_only || m.valid)
        .collect();
    info!(count = found.len(), "scan finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
    } else {
        for m in &found {
            println!(
                "{:<8} {:<5} {:<20} {}",
                m.start,
                m.kind.label(),
                m.raw,
                if m.valid { "VALID" } else { "INVALID" }
            );
        }
    }

    Ok(())
}
