//! # quiz-core
//!
//! Core types shared across all quizlint crates:
//! - Multi-sheet document model (`questions.json`, `strings.json`, `results.json`)
//! - The uniform [`ValidationResult`] record and its status/severity/source enums
//! - Document kinds and the per-site document bundle
//! - Cross-cutting error types

pub mod documents;
pub mod errors;
pub mod table;
pub mod validation;

pub use documents::{DocumentKind, QuizDocuments};
pub use errors::CoreError;
pub use table::{Document, Row, Table};
pub use validation::{Severity, SeverityPair, Source, Status, ValidationResult};

/// Sheet holding one row per question (in `questions.json` and `strings.json`).
pub const QUESTIONS_SHEET: &str = "questions";

/// Sheet holding one row per authored result (in `results.json`).
pub const RESULT_SHEET: &str = "result";

/// Sheet holding the result routing rules (in `results.json`).
pub const RESULT_DESTINATION_SHEET: &str = "result-destination";

/// Value of an option's `next` column that ends the quiz.
pub const TERMINAL_MARKER: &str = "RESULT";

/// Spreadsheet row of the first data row: 1-based plus one header row.
pub const ROW_OFFSET: usize = 2;
