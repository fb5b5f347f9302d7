//! Modulus-11 check digits as used by both CPF and CNPJ.
//!
//! A check digit is the weighted sum of the preceding digits reduced modulo
//! 11: remainders 0 and 1 map to `0`, any other remainder `r` maps to
//! `11 - r`. Each document appends two such digits, the second computed over
//! the base extended with the first.

use crate::identifiers::DocumentKind;
use crate::validation::ValidationError;

/// Strips every character that is not an ASCII digit, preserving order.
///
/// Never fails; input without digits yields an empty string. Digits from
/// other scripts (full-width, Arabic-Indic, ...) are not ASCII digits and are
/// removed like any other character.
pub fn normalize(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Numeric values (`0..=9`) of the ASCII digits in `input`.
pub fn digit_values(input: &str) -> Vec<u8> {
    input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// Computes one modulus-11 check digit.
///
/// Weights are aligned left-to-right with `digits`; the shorter of the two
/// slices bounds the sum.
pub fn check_digit(digits: &[u8], weights: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * u32::from(w))
        .sum();
    match (sum % 11) as u8 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// Returns `true` for a non-empty sequence made of a single repeated digit.
pub fn is_repeated(digits: &[u8]) -> bool {
    match digits.split_first() {
        Some((first, rest)) => rest.iter().all(|d| d == first),
        None => false,
    }
}

/// Computes both check digits for `base`.
pub(crate) fn check_digits(base: &[u8], first_weights: &[u8], second_weights: &[u8]) -> [u8; 2] {
    let first = check_digit(base, first_weights);
    let mut extended = Vec::with_capacity(base.len() + 1);
    extended.extend_from_slice(base);
    extended.push(first);
    [first, check_digit(&extended, second_weights)]
}

/// Runs the full document check and returns the normalized digits.
pub(crate) fn verify(
    kind: DocumentKind,
    input: &str,
    first_weights: &[u8],
    second_weights: &[u8],
) -> Result<String, ValidationError> {
    let digits = digit_values(input);
    if digits.len() != kind.digit_count() {
        return Err(ValidationError::WrongLength {
            kind,
            expected: kind.digit_count(),
            found: digits.len(),
        });
    }
    if is_repeated(&digits) {
        return Err(ValidationError::RepeatedDigits { kind });
    }

    let (base, found) = digits.split_at(first_weights.len());
    let expected = check_digits(base, first_weights, second_weights);
    if found != expected.as_slice() {
        return Err(ValidationError::CheckDigitMismatch {
            kind,
            expected: render(&expected),
            found: render(found),
        });
    }
    Ok(render(&digits))
}

/// Renders digit values back into ASCII.
pub(crate) fn render(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}
