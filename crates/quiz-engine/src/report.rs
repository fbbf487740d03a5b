//! Batch guarding and report assembly for one site.
//!
//! A batch only runs when every document it needs is present and carries the
//! sheets the checks index into. Otherwise the batch is empty, never partial.

use serde::Serialize;

use quiz_core::{
    Document, DocumentKind, QUESTIONS_SHEET, QuizDocuments, RESULT_DESTINATION_SHEET,
    RESULT_SHEET, Severity, ValidationResult,
};

use crate::content::perform_validations;
use crate::results::perform_validation_results;

/// Both batches for one site, each in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SiteReport {
    pub content: Vec<ValidationResult>,
    pub results: Vec<ValidationResult>,
}

impl SiteReport {
    /// All records, content batch first.
    pub fn records(&self) -> impl Iterator<Item = &ValidationResult> {
        self.content.iter().chain(self.results.iter())
    }

    #[must_use]
    pub fn summary(&self) -> ReportSummary {
        ReportSummary::from_records(self.records())
    }
}

/// Aggregate counts over a set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    /// Highest severity among invalid records.
    pub worst: Option<Severity>,
}

impl ReportSummary {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a ValidationResult>) -> Self {
        let mut summary = Self::default();
        for record in records {
            summary.total += 1;
            if record.is_valid() {
                summary.valid += 1;
            } else {
                summary.invalid += 1;
                summary.worst = summary.worst.max(Some(record.severity));
            }
        }
        summary
    }

    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.invalid > 0
    }
}

fn has_sheets(document: &Document, kind: DocumentKind, sheets: &[&str]) -> bool {
    let mut ok = true;
    for sheet in sheets {
        if let Err(error) = document.require_sheet(kind.file_name(), sheet) {
            tracing::warn!(%error, "skipping validation batch");
            ok = false;
        }
    }
    ok
}

/// Content batch, or empty when `questions.json` or `strings.json` is unusable.
#[must_use]
pub fn run_content_batch(documents: &QuizDocuments) -> Vec<ValidationResult> {
    let (Some(questions), Some(strings)) = (&documents.questions, &documents.strings) else {
        tracing::warn!(missing = ?documents.missing(), "content batch skipped: documents unavailable");
        return Vec::new();
    };
    if !has_sheets(questions, DocumentKind::Questions, &[QUESTIONS_SHEET])
        || !has_sheets(strings, DocumentKind::Strings, &[QUESTIONS_SHEET])
    {
        return Vec::new();
    }
    perform_validations(questions, strings)
}

/// Results batch, or empty unless all three documents are usable.
#[must_use]
pub fn run_results_batch(documents: &QuizDocuments) -> Vec<ValidationResult> {
    let (Some(questions), Some(strings), Some(results)) =
        (&documents.questions, &documents.strings, &documents.results)
    else {
        tracing::warn!(missing = ?documents.missing(), "results batch skipped: documents unavailable");
        return Vec::new();
    };
    if !has_sheets(questions, DocumentKind::Questions, &[QUESTIONS_SHEET])
        || !has_sheets(
            results,
            DocumentKind::Results,
            &[RESULT_SHEET, RESULT_DESTINATION_SHEET],
        )
    {
        return Vec::new();
    }
    perform_validation_results(questions, strings, results)
}

/// Run every batch whose documents are available.
#[must_use]
pub fn validate_site(documents: &QuizDocuments) -> SiteReport {
    SiteReport {
        content: run_content_batch(documents),
        results: run_results_batch(documents),
    }
}
