use thiserror::Error;

use crate::identifiers::DocumentKind;

/// Reasons a raw input is rejected as a CPF or CNPJ.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The normalized input does not have the digit count of the document.
    #[error("{kind} must have {expected} digits, found {found}")]
    WrongLength {
        /// Document the input was checked against.
        kind: DocumentKind,
        /// Required digit count.
        expected: usize,
        /// Digit count after normalization.
        found: usize,
    },
    /// Every digit is the same (e.g. `111.111.111-11`).
    #[error("{kind} digits must not all be the same")]
    RepeatedDigits {
        /// Document the input was checked against.
        kind: DocumentKind,
    },
    /// The trailing two digits disagree with the computed check digits.
    #[error("{kind} check digits are {found}, expected {expected}")]
    CheckDigitMismatch {
        /// Document the input was checked against.
        kind: DocumentKind,
        /// Check digits computed from the base.
        expected: String,
        /// Check digits present in the input.
        found: String,
    },
    /// The digit count matches neither CPF nor CNPJ.
    #[error("no document has {found} digits (CPF has 11, CNPJ has 14)")]
    UnknownLength {
        /// Digit count after normalization.
        found: usize,
    },
}
