//! CNPJ (Cadastro Nacional da Pessoa Jurídica): 12 base digits (8 company
//! root + 4 branch) followed by 2 check digits.

use crate::checksum;
use crate::identifiers::DocumentKind;
use crate::validation::ValidationError;

/// Digit count of a CNPJ.
pub const CNPJ_LEN: usize = 14;

const FIRST_WEIGHTS: [u8; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u8; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Computes the two check digits for a 12-digit CNPJ base (values `0..=9`).
pub fn cnpj_check_digits(base: &[u8; 12]) -> [u8; 2] {
    checksum::check_digits(base, &FIRST_WEIGHTS, &SECOND_WEIGHTS)
}

/// Checks `input` as a CNPJ, returning its normalized digits.
///
/// # Errors
///
/// Returns [`ValidationError`] naming the first rule the input breaks.
pub fn check_cnpj(input: &str) -> Result<String, ValidationError> {
    checksum::verify(DocumentKind::Cnpj, input, &FIRST_WEIGHTS, &SECOND_WEIGHTS)
}

/// Returns `true` iff `input` holds a self-consistent CNPJ.
pub fn validate_cnpj(input: &str) -> bool {
    check_cnpj(input).is_ok()
}
