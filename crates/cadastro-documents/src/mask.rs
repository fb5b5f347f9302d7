//! Punctuation masks for CPF and CNPJ.
//!
//! Formatting is progressive so it can run on every keystroke: digits fill
//! the `#` slots of the template in order, and a separator is written only
//! when a digit follows it. Four CPF digits render as `111.4`, three as
//! `111`. Digits beyond the last slot are dropped.

use regex::Regex;

use crate::checksum::normalize;
use crate::cpf::CPF_LEN;

const SLOT: char = '#';

/// CPF template: `XXX.XXX.XXX-XX`.
pub const CPF_MASK: Mask = Mask::new("###.###.###-##");
/// CNPJ template: `XX.XXX.XXX/XXXX-XX`.
pub const CNPJ_MASK: Mask = Mask::new("##.###.###/####-##");

/// A punctuation template where `#` marks a digit slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask {
    template: &'static str,
}

impl Mask {
    /// Creates a mask from a template such as `###-##`.
    pub const fn new(template: &'static str) -> Self {
        Self { template }
    }

    /// The raw template.
    pub fn template(&self) -> &'static str {
        self.template
    }

    /// Number of digit slots.
    pub fn capacity(&self) -> usize {
        self.template.chars().filter(|&c| c == SLOT).count()
    }

    /// Character count of a fully formatted value.
    pub fn width(&self) -> usize {
        self.template.chars().count()
    }

    /// Renders the ASCII digits of `input` into the template.
    ///
    /// Non-digit characters in `input` are ignored, so applying a mask to an
    /// already formatted value returns it unchanged.
    pub fn apply(&self, input: &str) -> String {
        let mut digits = input.chars().filter(char::is_ascii_digit).peekable();
        let mut out = String::with_capacity(self.template.len());
        for c in self.template.chars() {
            if c == SLOT {
                match digits.next() {
                    Some(d) => out.push(d),
                    None => break,
                }
            } else if digits.peek().is_some() {
                out.push(c);
            } else {
                break;
            }
        }
        out
    }

    /// Returns `true` if `value` is a complete rendering of this mask.
    pub fn matches(&self, value: &str) -> bool {
        let pattern: String = self
            .template
            .chars()
            .map(|c| {
                if c == SLOT {
                    "[0-9]".to_string()
                } else {
                    regex::escape(&c.to_string())
                }
            })
            .collect();
        Regex::new(&format!("^{pattern}$"))
            .expect("escaped mask template is a valid regex")
            .is_match(value)
    }
}

/// Formats `input` progressively as a CPF (`XXX.XXX.XXX-XX`).
///
/// ```rust
/// use cadastro_documents::format_cpf;
///
/// assert_eq!(format_cpf("12345678901"), "123.456.789-01");
/// assert_eq!(format_cpf("1234"), "123.4");
/// ```
pub fn format_cpf(input: &str) -> String {
    CPF_MASK.apply(input)
}

/// Formats `input` progressively as a CNPJ (`XX.XXX.XXX/XXXX-XX`).
pub fn format_cnpj(input: &str) -> String {
    CNPJ_MASK.apply(input)
}

/// Formats a field that accepts either document.
///
/// Up to 11 digits are rendered with the CPF mask; longer input switches to
/// the CNPJ mask.
pub fn format_document(input: &str) -> String {
    let digits = normalize(input);
    if digits.len() <= CPF_LEN {
        CPF_MASK.apply(&digits)
    } else {
        CNPJ_MASK.apply(&digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_and_width() {
        assert_eq!(CPF_MASK.capacity(), 11);
        assert_eq!(CPF_MASK.width(), 14);
        assert_eq!(CNPJ_MASK.capacity(), 14);
        assert_eq!(CNPJ_MASK.width(), 18);
    }

    #[test]
    fn cpf_separators_appear_progressively() {
        let expected = [
            "",
            "1",
            "12",
            "123",
            "123.4",
            "123.45",
            "123.456",
            "123.456.7",
            "123.456.78",
            "123.456.789",
            "123.456.789-0",
            "123.456.789-01",
        ];
        let digits = "12345678901";
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(format_cpf(&digits[..n]), *want, "prefix of {n} digits");
        }
    }

    #[test]
    fn cnpj_separators_appear_progressively() {
        assert_eq!(format_cnpj("11"), "11");
        assert_eq!(format_cnpj("112"), "11.2");
        assert_eq!(format_cnpj("11222333"), "11.222.333");
        assert_eq!(format_cnpj("112223330"), "11.222.333/0");
        assert_eq!(format_cnpj("1122233300018"), "11.222.333/0001-8");
    }

    #[test]
    fn extra_digits_are_dropped() {
        assert_eq!(format_cpf("123456789012345"), "123.456.789-01");
        assert_eq!(format_cnpj("1122233300018199"), "11.222.333/0001-81");
    }

    #[test]
    fn document_mask_switches_after_cpf_length() {
        assert_eq!(format_document("12345678901"), "123.456.789-01");
        assert_eq!(format_document("123456789012"), "12.345.678/9012");
    }

    #[test]
    fn matches_requires_complete_punctuated_value() {
        assert!(CPF_MASK.matches("111.444.777-35"));
        assert!(!CPF_MASK.matches("11144477735"));
        assert!(!CPF_MASK.matches("111.444.777-3"));
        assert!(CNPJ_MASK.matches("11.222.333/0001-81"));
        assert!(!CNPJ_MASK.matches("11.222.333/0001-81 "));
    }
}
