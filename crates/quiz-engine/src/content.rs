//! Content checks over `questions.json` and `strings.json`.
//!
//! The batch is a fixed, ordered list of [`ContentCheck`] variants. Each
//! variant resolves to exactly one [`ValidationResult`]; a failing check never
//! prevents the others from running.

use quiz_core::{
    Document, QUESTIONS_SHEET, ROW_OFFSET, SeverityPair, Source, TERMINAL_MARKER,
    ValidationResult,
};

use crate::parse::leading_int;

/// Entry of `:names` that names the question index sheet itself.
const RESERVED_NAME: &str = "questions";

// ---------------------------------------------------------------------------
// QuestionTable
// ---------------------------------------------------------------------------

/// Which document's `questions` sheet a check reads question IDs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionTable {
    /// `questions.json`, IDs in the `questions` column.
    Questions,
    /// `strings.json`, IDs in the `q` column.
    Strings,
}

impl QuestionTable {
    #[must_use]
    pub const fn id_column(self) -> &'static str {
        match self {
            Self::Questions => "questions",
            Self::Strings => "q",
        }
    }

    #[must_use]
    pub const fn source(self) -> Source {
        match self {
            Self::Questions => Source::Questions,
            Self::Strings => Source::Strings,
        }
    }

    /// Question IDs of `document` in row order.
    #[must_use]
    pub fn ids(self, document: &Document) -> Vec<&str> {
        document
            .rows(QUESTIONS_SHEET)
            .iter()
            .map(|row| row.get(self.id_column()))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

/// IDs are duplicates when an earlier row already used them. Each repeat is
/// listed once per extra occurrence.
#[must_use]
pub fn validate_unique_question_ids(document: &Document, table: QuestionTable) -> ValidationResult {
    let ids = table.ids(document);
    let duplicates: Vec<&str> = ids
        .iter()
        .enumerate()
        .filter(|(index, id)| ids.iter().position(|other| other == *id) != Some(*index))
        .map(|(_, id)| *id)
        .collect();

    let is_valid = duplicates.is_empty();
    let body = if is_valid {
        "All question IDs are unique.".to_string()
    } else {
        format!("Duplicate IDs found: {}.", duplicates.join(", "))
    };
    ValidationResult::new(
        is_valid,
        SeverityPair::POSITIVE_NEGATIVE,
        "Unique Question IDs",
        body,
        table.source(),
    )
}

/// Every question needs integer `min-selections` / `max-selections` with
/// `min <= max`. Offending rows are listed as spreadsheet row numbers.
#[must_use]
pub fn validate_selections(questions: &Document) -> ValidationResult {
    let offending: Vec<String> = questions
        .rows(QUESTIONS_SHEET)
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            let min = leading_int(row.get("min-selections"));
            let max = leading_int(row.get("max-selections"));
            match (min, max) {
                (Some(min), Some(max)) => min > max,
                _ => true,
            }
        })
        .map(|(index, _)| (index + ROW_OFFSET).to_string())
        .collect();

    let is_valid = offending.is_empty();
    let body = if is_valid {
        "Min/max selections are valid.".to_string()
    } else {
        format!(
            "Issues with min/max selections. Please check these indexes(helix-questions): {}.",
            offending.join(", ")
        )
    };
    ValidationResult::new(
        is_valid,
        SeverityPair::POSITIVE_NEGATIVE,
        "Selections Validation",
        body,
        Source::Questions,
    )
}

/// The document's `:names` list, minus the reserved `questions` entry, must
/// be exactly `expected`.
#[must_use]
pub fn validate_names_array(
    document: &Document,
    expected: &[&str],
    table: QuestionTable,
) -> ValidationResult {
    let mut names: Vec<&str> = document
        .names()
        .unwrap_or_default()
        .iter()
        .map(String::as_str)
        .filter(|name| *name != RESERVED_NAME)
        .collect();
    names.sort_unstable();

    let missing: Vec<&str> = expected
        .iter()
        .copied()
        .filter(|name| !names.contains(name))
        .collect();
    let unexpected: Vec<&str> = names
        .iter()
        .copied()
        .filter(|name| !expected.contains(name))
        .collect();

    let is_valid = missing.is_empty() && unexpected.is_empty();
    let body = if is_valid {
        "The :names array accurately reflects the expected question IDs.".to_string()
    } else {
        format!(
            "Missing expected names: {}. Unexpected names found: {}.",
            missing.join(", "),
            unexpected.join(", ")
        )
    };
    ValidationResult::new(
        is_valid,
        SeverityPair::POSITIVE_NEGATIVE,
        "Names Array Integrity",
        body,
        table.source(),
    )
}

/// Some sheet must have every option's `next` equal to the terminal marker.
///
/// Only existence is checked. When several sheets qualify the first one (in
/// document order) is named and the rest are listed for the author.
#[must_use]
pub fn validate_end_flow(questions: &Document) -> ValidationResult {
    let terminal: Vec<&str> = questions
        .sheets()
        .filter(|(_, table)| {
            table
                .rows
                .iter()
                .all(|row| row.get("next") == TERMINAL_MARKER)
        })
        .map(|(name, _)| name)
        .collect();

    let body = match terminal.as_slice() {
        [] => "No question has all paths ending with RESULT, indicating the quiz may not have a proper end."
            .to_string(),
        [last] => format!(
            "All paths in '{last}' correctly end with RESULT leading to the results page."
        ),
        [last, others @ ..] => format!(
            "All paths in '{last}' correctly end with RESULT leading to the results page. Other questions ending with RESULT: {}.",
            others.join(", ")
        ),
    };
    ValidationResult::new(
        !terminal.is_empty(),
        SeverityPair::POSITIVE_NEGATIVE,
        "End Flow Check",
        body,
        Source::Questions,
    )
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// One entry of the content batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentCheck {
    UniqueQuestionIds(QuestionTable),
    Selections,
    /// Compare the named document's `:names` with the question IDs of `questions.json`.
    NamesArray(QuestionTable),
    EndFlow,
}

/// The content batch, in display order.
pub const CONTENT_CHECKS: [ContentCheck; 6] = [
    ContentCheck::UniqueQuestionIds(QuestionTable::Questions),
    ContentCheck::UniqueQuestionIds(QuestionTable::Strings),
    ContentCheck::Selections,
    ContentCheck::NamesArray(QuestionTable::Strings),
    ContentCheck::NamesArray(QuestionTable::Questions),
    ContentCheck::EndFlow,
];

impl ContentCheck {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UniqueQuestionIds(_) => "unique_question_ids",
            Self::Selections => "selections",
            Self::NamesArray(_) => "names_array",
            Self::EndFlow => "end_flow",
        }
    }

    #[must_use]
    pub fn run(self, questions: &Document, strings: &Document) -> ValidationResult {
        let document_for = |table: QuestionTable| match table {
            QuestionTable::Questions => questions,
            QuestionTable::Strings => strings,
        };

        match self {
            Self::UniqueQuestionIds(table) => {
                validate_unique_question_ids(document_for(table), table)
            }
            Self::Selections => validate_selections(questions),
            Self::NamesArray(table) => {
                let expected = QuestionTable::Questions.ids(questions);
                validate_names_array(document_for(table), &expected, table)
            }
            Self::EndFlow => validate_end_flow(questions),
        }
    }
}

/// Run the content batch in order, then stamp each record's `source` from
/// its heading tag.
#[must_use]
pub fn perform_validations(questions: &Document, strings: &Document) -> Vec<ValidationResult> {
    let mut validations: Vec<ValidationResult> = CONTENT_CHECKS
        .iter()
        .map(|check| {
            let result = check.run(questions, strings);
            tracing::debug!(check = check.name(), status = %result.status, "content check finished");
            result
        })
        .collect();

    for validation in &mut validations {
        validation.source = Source::from_content_heading(&validation.heading);
    }
    validations
}
