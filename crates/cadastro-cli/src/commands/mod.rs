//! Subcommand implementations.

use cadastro_documents::DocumentKind;
use clap::ValueEnum;

pub mod check;
pub mod format;
pub mod gen;
pub mod id;
pub mod normalize;
pub mod scan;
pub mod validate;

/// Document kind as accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// Individual taxpayer (11 digits)
    Cpf,
    /// Company taxpayer (14 digits)
    Cnpj,
}

impl From<KindArg> for DocumentKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Cpf => DocumentKind::Cpf,
            KindArg::Cnpj => DocumentKind::Cnpj,
        }
    }
}
