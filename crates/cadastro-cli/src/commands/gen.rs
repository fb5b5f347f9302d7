//! Generate command implementation.

use cadastro_documents::{derive_cnpj, derive_cpf, Document, DocumentKind};
use tracing::debug;

use super::KindArg;

pub fn run(
    kind: KindArg,
    count: u32,
    seed: u64,
    formatted: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let kind = DocumentKind::from(kind);
    debug!(%kind, count, seed, "deriving documents");

    for index in 0..count {
        let document: Document = match kind {
            DocumentKind::Cpf => derive_cpf(seed, index).into(),
            DocumentKind::Cnpj => derive_cnpj(seed, index).into(),
        };
        if formatted {
            println!("{}", document.formatted());
        } else {
            println!("{}", document.digits());
        }
    }

    Ok(())
}
