//! Brazilian taxpayer document primitives for producer registration.
//!
//! Covers the two documents a producer may register with: CPF (individuals,
//! 11 digits) and CNPJ (companies, 14 digits). Everything here is a pure
//! function of its input: digits are extracted, the public modulus-11
//! check digits are verified, and digit sequences are rendered into their
//! punctuated form, progressively while a user is still typing.
//!
//! Validity means self-consistency of the digit string only; nothing in this
//! crate consults a government registry.
//!
//! ```rust
//! use cadastro_documents::{format_cpf, validate_cnpj, validate_cpf, Cpf};
//!
//! assert!(validate_cpf("111.444.777-35"));
//! assert!(validate_cnpj("11222333000181"));
//! assert_eq!(format_cpf("1114"), "111.4");
//!
//! let cpf = Cpf::parse("11144477735")?;
//! assert_eq!(cpf.to_string(), "111.444.777-35");
//! # Ok::<(), cadastro_documents::ValidationError>(())
//! ```
#![deny(missing_docs)]

/// Modulus-11 check-digit engine and digit extraction.
pub mod checksum;
/// CNPJ validation and check-digit computation.
pub mod cnpj;
/// CPF validation and check-digit computation.
pub mod cpf;
/// Random list keys and deterministic fixture documents.
pub mod generate;
/// Typed documents and kind detection.
pub mod identifiers;
/// Punctuation masks and progressive formatting.
pub mod mask;
/// Inspection reports for raw document input.
pub mod report;
/// Extraction of document-shaped tokens from free text.
pub mod scan;
/// Rejection reasons for document input.
pub mod validation;

pub use checksum::normalize;
pub use cnpj::{check_cnpj, cnpj_check_digits, validate_cnpj};
pub use cpf::{check_cpf, cpf_check_digits, validate_cpf};
pub use generate::{derive_cnpj, derive_cpf, generate_id, generate_id_with};
pub use identifiers::{detect_kind, validate_document, Cnpj, Cpf, Document, DocumentKind};
pub use mask::{format_cnpj, format_cpf, format_document, Mask, CNPJ_MASK, CPF_MASK};
pub use report::{inspect, inspect_as, DocumentReport, ReportStatus};
pub use scan::{scan, DocumentMatch};
pub use validation::ValidationError;
