//! Finds CPF- and CNPJ-shaped tokens in free text such as pasted
//! spreadsheets or notes, punctuated or not.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::identifiers::DocumentKind;

static CPF_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9]{3}\.?[0-9]{3}\.?[0-9]{3}-?[0-9]{2}\b").expect("CPF token regex")
});

static CNPJ_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9]{2}\.?[0-9]{3}\.?[0-9]{3}/?[0-9]{4}-?[0-9]{2}\b").expect("CNPJ token regex")
});

/// A document-shaped token found in text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMatch {
    /// Kind implied by the token shape.
    pub kind: DocumentKind,
    /// Token as it appears in the text.
    pub raw: String,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// Whether the check digits are consistent.
    pub valid: bool,
}

/// Extracts every CPF- or CNPJ-shaped token from `text`, in order of
/// appearance.
///
/// A CNPJ token wins over any CPF token overlapping it.
pub fn scan(text: &str) -> Vec<DocumentMatch> {
    let mut found: Vec<DocumentMatch> = CNPJ_TOKEN
        .find_iter(text)
        .map(|m| token(DocumentKind::Cnpj, m))
        .collect();

    let cpf_tokens: Vec<DocumentMatch> = CPF_TOKEN
        .find_iter(text)
        .filter(|m| {
            !found
                .iter()
                .any(|cnpj| m.start() < cnpj.end && cnpj.start < m.end())
        })
        .map(|m| token(DocumentKind::Cpf, m))
        .collect();
    found.extend(cpf_tokens);
    found.sort_by_key(|m| m.start);
    found
}

fn token(kind: DocumentKind, m: regex::Match<'_>) -> DocumentMatch {
    let valid = kind.validate(m.as_str());
    trace!(%kind, raw = m.as_str(), start = m.start(), valid, "document token");
    DocumentMatch {
        kind,
        raw: m.as_str().to_string(),
        start: m.start(),
        end: m.end(),
        valid,
    }
}
