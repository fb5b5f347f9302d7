use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checksum::normalize;
use crate::cnpj::{check_cnpj, CNPJ_LEN};
use crate::cpf::{check_cpf, CPF_LEN};
use crate::mask::{Mask, CNPJ_MASK, CPF_MASK};
use crate::validation::ValidationError;

/// The two Brazilian taxpayer documents a producer can register with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Individual taxpayer (11 digits).
    Cpf,
    /// Company taxpayer (14 digits).
    Cnpj,
}

impl DocumentKind {
    /// Digit count of this document.
    pub const fn digit_count(self) -> usize {
        match self {
            DocumentKind::Cpf => CPF_LEN,
            DocumentKind::Cnpj => CNPJ_LEN,
        }
    }

    /// Punctuation mask of this document.
    pub const fn mask(self) -> Mask {
        match self {
            DocumentKind::Cpf => CPF_MASK,
            DocumentKind::Cnpj => CNPJ_MASK,
        }
    }

    /// Upper-case acronym (`CPF` / `CNPJ`).
    pub const fn label(self) -> &'static str {
        match self {
            DocumentKind::Cpf => "CPF",
            DocumentKind::Cnpj => "CNPJ",
        }
    }

    /// Kind implied by a normalized digit count.
    pub fn from_digit_count(count: usize) -> Option<Self> {
        match count {
            CPF_LEN => Some(DocumentKind::Cpf),
            CNPJ_LEN => Some(DocumentKind::Cnpj),
            _ => None,
        }
    }

    /// Checks `input` against this kind, returning the normalized digits.
    pub fn check(self, input: &str) -> Result<String, ValidationError> {
        match self {
            DocumentKind::Cpf => check_cpf(input),
            DocumentKind::Cnpj => check_cnpj(input),
        }
    }

    /// Returns `true` iff `input` is a valid document of this kind.
    pub fn validate(self, input: &str) -> bool {
        self.check(input).is_ok()
    }

    /// Formats `input` progressively with this kind's mask.
    pub fn format(self, input: &str) -> String {
        self.mask().apply(input)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind implied by the digit count of `input`, if any.
pub fn detect_kind(input: &str) -> Option<DocumentKind> {
    DocumentKind::from_digit_count(normalize(input).len())
}

macro_rules! document {
    ($name:ident, $kind:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Wraps digits that already passed the check.
            pub(crate) fn from_checked(digits: String) -> Self {
                Self(digits)
            }

            /// Parses a validated document; punctuation is accepted and dropped.
            pub fn parse(value: impl AsRef<str>) -> Result<Self, ValidationError> {
                $kind.check(value.as_ref()).map(Self)
            }

            /// Normalized digits.
            pub fn digits(&self) -> &str {
                &self.0
            }

            /// Fully punctuated rendering.
            pub fn formatted(&self) -> String {
                $kind.format(&self.0)
            }

            /// Document kind.
            pub fn kind(&self) -> DocumentKind {
                $kind
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.formatted())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

document!(
    Cpf,
    DocumentKind::Cpf,
    "A validated CPF, stored as its 11 normalized digits."
);
document!(
    Cnpj,
    DocumentKind::Cnpj,
    "A validated CNPJ, stored as its 14 normalized digits."
);

/// A validated document of either kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "digits", rename_all = "lowercase")]
pub enum Document {
    /// Individual taxpayer.
    Cpf(Cpf),
    /// Company taxpayer.
    Cnpj(Cnpj),
}

impl Document {
    /// Parses either document, choosing the kind from the digit count.
    ///
    /// # Errors
    ///
    /// [`ValidationError::UnknownLength`] when the digit count is neither 11
    /// nor 14, otherwise the rejection reported by the kind's check.
    pub fn parse(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();
        let found = normalize(value).len();
        match DocumentKind::from_digit_count(found) {
            Some(DocumentKind::Cpf) => Cpf::parse(value).map(Document::Cpf),
            Some(DocumentKind::Cnpj) => Cnpj::parse(value).map(Document::Cnpj),
            None => Err(ValidationError::UnknownLength { found }),
        }
    }

    /// Document kind.
    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Cpf(_) => DocumentKind::Cpf,
            Document::Cnpj(_) => DocumentKind::Cnpj,
        }
    }

    /// Normalized digits.
    pub fn digits(&self) -> &str {
        match self {
            Document::Cpf(cpf) => cpf.digits(),
            Document::Cnpj(cnpj) => cnpj.digits(),
        }
    }

    /// Fully punctuated rendering.
    pub fn formatted(&self) -> String {
        self.kind().format(self.digits())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl From<Cpf> for Document {
    fn from(value: Cpf) -> Self {
        Document::Cpf(value)
    }
}

impl From<Cnpj> for Document {
    fn from(value: Cnpj) -> Self {
        Document::Cnpj(value)
    }
}

/// Returns `true` iff `input` is a valid CPF or a valid CNPJ.
pub fn validate_document(input: &str) -> bool {
    Document::parse(input).is_ok()
}
