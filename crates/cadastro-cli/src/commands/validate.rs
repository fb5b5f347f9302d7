//! Validate command implementation.

use cadastro_documents::{inspect, inspect_as};
use tracing::{debug, info};

use super::KindArg;

pub fn run(
    input: String,
    kind: Option<KindArg>,
    json: bool,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = match kind {
        Some(kind) => inspect_as(&input, kind.into()),
        None => inspect(&input),
    };
    debug!(digits = %report.digits, kind = ?report.kind, "inspected document");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(reason) = &report.reason {
        println!("INVALID {}: {}", report.formatted, reason);
    } else {
        let label = report.kind.map(|k| k.label()).unwrap_or("?");
        println!("VALID {} {}", label, report.formatted);
    }

    if !report.is_valid() {
        info!(reason = report.reason.as_deref().unwrap_or(""), "document rejected");
        if strict {
            std::process::exit(1);
        }
    }

    Ok(())
}
