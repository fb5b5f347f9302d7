//! CPF (Cadastro de Pessoas Físicas): 9 base digits followed by 2 check
//! digits, weights 10..=2 for the first and 11..=2 for the second.

use crate::checksum;
use crate::identifiers::DocumentKind;
use crate::validation::ValidationError;

/// Digit count of a CPF.
pub const CPF_LEN: usize = 11;

const FIRST_WEIGHTS: [u8; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u8; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Computes the two check digits for a 9-digit CPF base (values `0..=9`).
pub fn cpf_check_digits(base: &[u8; 9]) -> [u8; 2] {
    checksum::check_digits(base, &FIRST_WEIGHTS, &SECOND_WEIGHTS)
}

/// Checks `input` as a CPF, returning its normalized digits.
///
/// Punctuation and any other non-digit characters are ignored.
///
/// # Errors
///
/// Returns [`ValidationError`] naming the first rule the input breaks:
/// digit count, repeated digits, or check-digit mismatch.
pub fn check_cpf(input: &str) -> Result<String, ValidationError> {
    checksum::verify(DocumentKind::Cpf, input, &FIRST_WEIGHTS, &SECOND_WEIGHTS)
}

/// Returns `true` iff `input` holds a self-consistent CPF.
///
/// ```rust
/// use cadastro_documents::validate_cpf;
///
/// assert!(validate_cpf("111.444.777-35"));
/// assert!(!validate_cpf("111.111.111-11"));
/// ```
pub fn validate_cpf(input: &str) -> bool {
    check_cpf(input).is_ok()
}
