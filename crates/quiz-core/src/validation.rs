//! The uniform validation record and its enums.
//!
//! All enums serialize lowercase, matching the class names the report
//! renderer builds from them (`severity` maps straight onto an alert style).

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Valid,
    Invalid,
}

impl Status {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Display classification of a record.
///
/// Declared in rank order: `neutral` (0) through `negative` (4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Neutral,
    Info,
    Positive,
    Notice,
    Negative,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Info => "info",
            Self::Positive => "positive",
            Self::Notice => "notice",
            Self::Negative => "negative",
        }
    }

    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The severity a check reports when it passes and when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityPair {
    pub valid: Severity,
    pub invalid: Severity,
}

impl SeverityPair {
    pub const POSITIVE_NEGATIVE: Self = Self::new(Severity::Positive, Severity::Negative);
    pub const POSITIVE_INFO: Self = Self::new(Severity::Positive, Severity::Info);
    pub const POSITIVE_NOTICE: Self = Self::new(Severity::Positive, Severity::Notice);

    #[must_use]
    pub const fn new(valid: Severity, invalid: Severity) -> Self {
        Self { valid, invalid }
    }

    #[must_use]
    pub const fn pick(self, is_valid: bool) -> Severity {
        if is_valid { self.valid } else { self.invalid }
    }
}

// ---------------------------------------------------------------------------
// Source
// ---------------------------------------------------------------------------

/// The dataset a check primarily concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Questions,
    Strings,
    Results,
}

impl Source {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Questions => "questions",
            Self::Strings => "strings",
            Self::Results => "results",
        }
    }

    /// Suffix appended to every heading produced for this source.
    #[must_use]
    pub const fn heading_suffix(self) -> &'static str {
        match self {
            Self::Questions => " (Questions)",
            Self::Strings => " (Strings)",
            Self::Results => " (Results)",
        }
    }

    /// Recover the source of a content-batch record from its heading.
    ///
    /// Anything not tagged `(Questions)` belongs to the strings table.
    #[must_use]
    pub fn from_content_heading(heading: &str) -> Self {
        if heading.contains("(Questions)") {
            Self::Questions
        } else {
            Self::Strings
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ValidationResult
// ---------------------------------------------------------------------------

/// Outcome of one check, in the shape the report renderer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub status: Status,
    pub severity: Severity,
    pub heading: String,
    pub body: String,
    pub source: Source,
}

impl ValidationResult {
    /// Build a record, deriving status and severity from `is_valid` and
    /// suffixing `check_name` with the source tag.
    #[must_use]
    pub fn new(
        is_valid: bool,
        severities: SeverityPair,
        check_name: &str,
        body: impl Into<String>,
        source: Source,
    ) -> Self {
        Self {
            status: if is_valid {
                Status::Valid
            } else {
                Status::Invalid
            },
            severity: severities.pick(is_valid),
            heading: format!("{check_name}{}", source.heading_suffix()),
            body: body.into(),
            source,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.status == Status::Valid
    }
}
