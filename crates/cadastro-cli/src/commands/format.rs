//! Format command implementation.

use cadastro_documents::{format_document, DocumentKind};

use super::KindArg;

pub fn run(input: String, kind: Option<KindArg>) -> Result<(), Box<dyn std::error::Error>> {
    let formatted = match kind {
        Some(kind) => DocumentKind::from(kind).format(&input),
        None => format_document(&input),
    };
    println!("{}", formatted);
    Ok(())
}
