use serde::{Deserialize, Serialize};

use crate::checksum::normalize;
use crate::identifiers::DocumentKind;
use crate::mask::format_document;
use crate::validation::ValidationError;

/// Outcome of an inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    /// The input is a self-consistent document.
    Valid,
    /// The input breaks at least one document rule.
    Invalid,
}

/// Everything known about one raw input after checking it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReport {
    /// Input exactly as received.
    pub input: String,
    /// Normalized digits.
    pub digits: String,
    /// Kind checked against; absent when the digit count fits no document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<DocumentKind>,
    /// Progressive rendering of the digits.
    pub formatted: String,
    /// Overall status.
    pub status: ReportStatus,
    /// Rejection reason for invalid input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Whether the input was already in complete mask form.
    pub masked_input: bool,
}

impl DocumentReport {
    /// Returns `true` for [`ReportStatus::Valid`].
    pub fn is_valid(&self) -> bool {
        self.status == ReportStatus::Valid
    }
}

/// Inspects `input`, detecting the kind from its digit count.
pub fn inspect(input: &str) -> DocumentReport {
    let digits = normalize(input);
    match DocumentKind::from_digit_count(digits.len()) {
        Some(kind) => inspect_as(input, kind),
        None => DocumentReport {
            input: input.to_string(),
            formatted: format_document(&digits),
            kind: None,
            status: ReportStatus::Invalid,
            reason: Some(
                ValidationError::UnknownLength {
                    found: digits.len(),
                }
                .to_string(),
            ),
            masked_input: false,
            digits,
        },
    }
}

/// Inspects `input` as a document of the given kind.
pub fn inspect_as(input: &str, kind: DocumentKind) -> DocumentReport {
    let (status, reason) = match kind.check(input) {
        Ok(_) => (ReportStatus::Valid, None),
        Err(e) => (ReportStatus::Invalid, Some(e.to_string())),
    };
    DocumentReport {
        input: input.to_string(),
        digits: normalize(input),
        kind: Some(kind),
        formatted: kind.format(input),
        status,
        reason,
        masked_input: kind.mask().matches(input),
    }
}
