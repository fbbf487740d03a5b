//! Results checks over `results.json`, cross-referenced with `questions.json`.
//!
//! Row positions in bodies are spreadsheet row numbers (`index + 2`) so
//! authors can jump straight to the offending line of the sheet.

use std::collections::BTreeSet;

use quiz_core::{
    Document, RESULT_DESTINATION_SHEET, RESULT_SHEET, ROW_OFFSET, Row,
    SeverityPair, Source, ValidationResult,
};

use crate::combinations::first_question_singles;

fn join_offsets(indices: impl IntoIterator<Item = usize>) -> String {
    indices
        .into_iter()
        .map(|index| (index + ROW_OFFSET).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// 0-based indices of rows whose `column` is empty or absent.
fn empty_cells(rows: &[Row], column: &str) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row.get(column).is_empty())
        .map(|(index, _)| index)
        .collect()
}

const NO_FIRST_QUESTION: &str =
    "No questions found in helix-questions, so results coverage cannot be computed.";

#[must_use]
pub fn validate_primary_result(results: &Document) -> ValidationResult {
    let missing = empty_cells(results.rows(RESULT_SHEET), "result-primary");
    let total = results.sheet(RESULT_SHEET).map_or(0, |table| table.total);

    let is_valid = missing.is_empty();
    let body = if is_valid {
        format!("You have authored {total} questions and all have primary results")
    } else {
        format!(
            "Some questions are missing primary results. Please check these indexes(helix-result): {}.",
            join_offsets(missing)
        )
    };
    ValidationResult::new(
        is_valid,
        SeverityPair::POSITIVE_NEGATIVE,
        "Total Results and Primary Results",
        body,
        Source::Results,
    )
}

#[must_use]
pub fn validate_secondary_result(results: &Document) -> ValidationResult {
    let missing = empty_cells(results.rows(RESULT_SHEET), "result-secondary");

    let is_valid = missing.is_empty();
    let body = if is_valid {
        "You have authored all questions with secondary results".to_string()
    } else {
        format!(
            "Some questions are missing secondary results. Please check these indexes(helix-result): {}.",
            join_offsets(missing)
        )
    };
    ValidationResult::new(
        is_valid,
        SeverityPair::POSITIVE_INFO,
        "Secondary Results",
        body,
        Source::Results,
    )
}

/// Every single-selection combination of the first question needs at least
/// one matching result row. Missing ones are reported by combination position.
#[must_use]
pub fn validate_results_coverage(questions: &Document, results: &Document) -> ValidationResult {
    const HEADING: &str = "Results Coverage for Single Selection";

    let Some(singles) = first_question_singles(questions) else {
        return ValidationResult::new(
            false,
            SeverityPair::POSITIVE_NEGATIVE,
            HEADING,
            NO_FIRST_QUESTION,
            Source::Results,
        );
    };

    let rows = results.rows(RESULT_SHEET);
    let missing: Vec<usize> = singles
        .iter()
        .enumerate()
        .filter(|(_, selection)| !rows.iter().any(|row| selection.matches(row)))
        .map(|(index, _)| index)
        .collect();

    let is_valid = missing.is_empty();
    let body = if is_valid {
        "You have authored and covered all possible results for the first single question."
            .to_string()
    } else {
        format!(
            "Some questions are missing results(helix-result): {}",
            join_offsets(missing)
        )
    };
    ValidationResult::new(
        is_valid,
        SeverityPair::POSITIVE_NEGATIVE,
        HEADING,
        body,
        Source::Results,
    )
}

/// The authored result count must equal the number of single-selection
/// combinations. Rows no combination matched first are reported as redundant.
#[must_use]
pub fn validate_results_coverage_redundance(
    questions: &Document,
    results: &Document,
) -> ValidationResult {
    const HEADING: &str = "Redundance Results Coverage for Single Selection";

    let Some(singles) = first_question_singles(questions) else {
        return ValidationResult::new(
            false,
            SeverityPair::POSITIVE_NOTICE,
            HEADING,
            NO_FIRST_QUESTION,
            Source::Results,
        );
    };

    let rows = results.rows(RESULT_SHEET);
    let matched: BTreeSet<usize> = singles
        .iter()
        .filter_map(|selection| rows.iter().position(|row| selection.matches(row)))
        .collect();
    let unmatched = (0..rows.len()).filter(|index| !matched.contains(index));

    let total = results.sheet(RESULT_SHEET).map_or(0, |table| table.total);
    let is_valid = singles.len() == total;
    let body = if is_valid {
        "You have authored and covered all possible results for the first single question."
            .to_string()
    } else {
        format!(
            "Some redundance results(helix-result): {}",
            join_offsets(unmatched)
        )
    };
    ValidationResult::new(
        is_valid,
        SeverityPair::POSITIVE_NOTICE,
        HEADING,
        body,
        Source::Results,
    )
}

/// Every primary result must be contained in some destination rule's
/// `result` matcher. Missing ones are reported by value.
#[must_use]
pub fn validate_primary_result_rules(results: &Document) -> ValidationResult {
    let destinations = results.rows(RESULT_DESTINATION_SHEET);
    let missing: Vec<&str> = results
        .rows(RESULT_SHEET)
        .iter()
        .map(|row| row.get("result-primary"))
        .filter(|primary| {
            !destinations
                .iter()
                .any(|destination| destination.get("result").contains(*primary))
        })
        .collect();

    let is_valid = missing.is_empty();
    let body = if is_valid {
        "You have authored result rules and cover all primary results.".to_string()
    } else {
        format!(
            "Some primary results are missing result rules. Please check these primary results(helix-result-destination): {}.",
            missing.join(", ")
        )
    };
    ValidationResult::new(
        is_valid,
        SeverityPair::POSITIVE_NEGATIVE,
        "Result Rules for Primary Results",
        body,
        Source::Results,
    )
}

#[must_use]
pub fn validate_result_url(results: &Document) -> ValidationResult {
    let missing = empty_cells(results.rows(RESULT_DESTINATION_SHEET), "url");

    let is_valid = missing.is_empty();
    let body = if is_valid {
        "You have authored result urls for all result rules.".to_string()
    } else {
        format!(
            "Some result rules are missing result urls. Please check these indexes(helix-result-destination): {}.",
            join_offsets(missing)
        )
    };
    ValidationResult::new(
        is_valid,
        SeverityPair::POSITIVE_NEGATIVE,
        "Result Urls",
        body,
        Source::Results,
    )
}

#[must_use]
pub fn validate_base_fragments(results: &Document) -> ValidationResult {
    let missing = empty_cells(results.rows(RESULT_DESTINATION_SHEET), "basic-fragments");

    let is_valid = missing.is_empty();
    let body = if is_valid {
        "You have authored base fragments for all result rules.".to_string()
    } else {
        format!(
            "Some result rules are missing base fragments. Please check these indexes(helix-result-destination): {}.",
            join_offsets(missing)
        )
    };
    ValidationResult::new(
        is_valid,
        SeverityPair::POSITIVE_NEGATIVE,
        "Result Base Fragments",
        body,
        Source::Results,
    )
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// One entry of the results batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsCheck {
    PrimaryResult,
    SecondaryResult,
    Coverage,
    CoverageRedundance,
    PrimaryResultRules,
    ResultUrl,
    BaseFragments,
}

/// The results batch, in display order.
pub const RESULTS_CHECKS: [ResultsCheck; 7] = [
    ResultsCheck::PrimaryResult,
    ResultsCheck::SecondaryResult,
    ResultsCheck::Coverage,
    ResultsCheck::CoverageRedundance,
    ResultsCheck::PrimaryResultRules,
    ResultsCheck::ResultUrl,
    ResultsCheck::BaseFragments,
];

impl ResultsCheck {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PrimaryResult => "primary_result",
            Self::SecondaryResult => "secondary_result",
            Self::Coverage => "results_coverage",
            Self::CoverageRedundance => "results_coverage_redundance",
            Self::PrimaryResultRules => "primary_result_rules",
            Self::ResultUrl => "result_url",
            Self::BaseFragments => "base_fragments",
        }
    }

    #[must_use]
    pub fn run(self, questions: &Document, results: &Document) -> ValidationResult {
        match self {
            Self::PrimaryResult => validate_primary_result(results),
            Self::SecondaryResult => validate_secondary_result(results),
            Self::Coverage => validate_results_coverage(questions, results),
            Self::CoverageRedundance => validate_results_coverage_redundance(questions, results),
            Self::PrimaryResultRules => validate_primary_result_rules(results),
            Self::ResultUrl => validate_result_url(results),
            Self::BaseFragments => validate_base_fragments(results),
        }
    }
}

/// Run the results batch in order.
///
/// `strings` is accepted so both batches share one calling convention; no
/// results check reads it today.
#[must_use]
pub fn perform_validation_results(
    questions: &Document,
    _strings: &Document,
    results: &Document,
) -> Vec<ValidationResult> {
    RESULTS_CHECKS
        .iter()
        .map(|check| {
            let result = check.run(questions, results);
            tracing::debug!(check = check.name(), status = %result.status, "results check finished");
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quiz_core::{QUESTIONS_SHEET, Severity, Status, Table};

    use super::*;

    fn row(cells: &[(&str, &str)]) -> Row {
        cells.iter().copied().collect()
    }

    fn questions_with_options(options: &[&str]) -> Document {
        Document::new()
            .with_sheet(
                QUESTIONS_SHEET,
                Table::from_rows(vec![row(&[
                    ("questions", "q1"),
                    ("min-selections", "1"),
                    ("max-selections", "1"),
                ])]),
            )
            .with_sheet(
                "q1",
                Table::from_rows(
                    options
                        .iter()
                        .map(|id| row(&[("options", *id), ("next", "RESULT")]))
                        .collect(),
                ),
            )
    }

    fn results_with(result_rows: Vec<Row>, destinations: Vec<Row>) -> Document {
        Document::new()
            .with_sheet(RESULT_SHEET, Table::from_rows(result_rows))
            .with_sheet(RESULT_DESTINATION_SHEET, Table::from_rows(destinations))
    }

    fn result_row(option: &str, primary: &str) -> Row {
        row(&[
            ("q1", option),
            ("result-primary", primary),
            ("result-secondary", "s"),
        ])
    }

    #[test]
    fn primary_and_secondary_report_offset_rows() {
        let results = results_with(
            vec![
                row(&[("result-primary", "r1"), ("result-secondary", "")]),
                row(&[("result-primary", ""), ("result-secondary", "s")]),
                row(&[("result-primary", "r3")]),
            ],
            vec![],
        );

        let primary = validate_primary_result(&results);
        assert_eq!(primary.status, Status::Invalid);
        assert_eq!(primary.severity, Severity::Negative);
        assert_eq!(
            primary.body,
            "Some questions are missing primary results. Please check these indexes(helix-result): 3."
        );

        let secondary = validate_secondary_result(&results);
        assert_eq!(secondary.severity, Severity::Info);
        assert!(secondary.body.ends_with("indexes(helix-result): 2, 4."));
    }

    #[test]
    fn primary_valid_body_uses_declared_total() {
        let results = results_with(vec![result_row("a", "r1"), result_row("b", "r2")], vec![]);
        let primary = validate_primary_result(&results);
        assert!(primary.is_valid());
        assert_eq!(
            primary.body,
            "You have authored 2 questions and all have primary results"
        );
        assert_eq!(primary.heading, "Total Results and Primary Results (Results)");
    }

    #[test]
    fn coverage_flags_unmatched_combination() {
        let questions = questions_with_options(&["a", "b", "c"]);
        let full = results_with(
            vec![result_row("a", "r1"), result_row("b", "r2"), result_row("c", "r3")],
            vec![],
        );
        assert!(validate_results_coverage(&questions, &full).is_valid());

        let partial = results_with(vec![result_row("a", "r1"), result_row("c", "r3")], vec![]);
        let result = validate_results_coverage(&questions, &partial);
        assert_eq!(result.status, Status::Invalid);
        assert_eq!(result.body, "Some questions are missing results(helix-result): 3");
    }

    #[test]
    fn redundance_surfaces_duplicate_row() {
        let questions = questions_with_options(&["a", "b"]);
        let exact = results_with(vec![result_row("a", "r1"), result_row("b", "r2")], vec![]);
        assert!(validate_results_coverage_redundance(&questions, &exact).is_valid());

        let duplicated = results_with(
            vec![result_row("a", "r1"), result_row("b", "r2"), result_row("a", "r9")],
            vec![],
        );
        let result = validate_results_coverage_redundance(&questions, &duplicated);
        assert_eq!(result.status, Status::Invalid);
        assert_eq!(result.severity, Severity::Notice);
        assert_eq!(result.body, "Some redundance results(helix-result): 4");
    }

    #[test]
    fn coverage_handles_wide_multi_select_question() {
        let ids: Vec<String> = (0..64).map(|i| format!("opt{i}")).collect();
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let questions = questions_with_options(&refs).with_sheet(
            QUESTIONS_SHEET,
            Table::from_rows(vec![row(&[("questions", "q1"), ("max-selections", "64")])]),
        );
        let results = results_with(refs.iter().map(|id| result_row(id, "r")).collect(), vec![]);

        assert!(validate_results_coverage(&questions, &results).is_valid());
        assert!(validate_results_coverage_redundance(&questions, &results).is_valid());
    }

    #[test]
    fn coverage_without_questions_is_invalid() {
        let results = results_with(vec![result_row("a", "r1")], vec![]);
        let coverage = validate_results_coverage(&Document::new(), &results);
        assert!(!coverage.is_valid());
        assert_eq!(coverage.body, NO_FIRST_QUESTION);
        let redundance = validate_results_coverage_redundance(&Document::new(), &results);
        assert_eq!(redundance.severity, Severity::Notice);
    }

    #[test]
    fn primary_rules_use_substring_matching() {
        let results = results_with(
            vec![result_row("a", "photoshop"), result_row("b", "premiere")],
            vec![row(&[("result", "(photoshop|lightroom)"), ("url", "/x")])],
        );
        let result = validate_primary_result_rules(&results);
        assert!(!result.is_valid());
        assert!(result.body.ends_with("(helix-result-destination): premiere."));
    }

    #[test]
    fn destination_url_and_fragments() {
        let results = results_with(
            vec![],
            vec![
                row(&[("result", "r1"), ("url", "https://x"), ("basic-fragments", "f1")]),
                row(&[("result", "r2"), ("url", ""), ("basic-fragments", "f2")]),
                row(&[("result", "r3"), ("url", "https://z")]),
            ],
        );
        let urls = validate_result_url(&results);
        assert!(urls.body.ends_with("indexes(helix-result-destination): 3."));
        let fragments = validate_base_fragments(&results);
        assert!(fragments.body.ends_with("indexes(helix-result-destination): 4."));
    }

    #[test]
    fn batch_order() {
        let questions = questions_with_options(&["a"]);
        let results = results_with(
            vec![result_row("a", "r1")],
            vec![row(&[("result", "r1"), ("url", "https://x"), ("basic-fragments", "f")])],
        );
        let report = perform_validation_results(&questions, &Document::new(), &results);
        let headings: Vec<&str> = report.iter().map(|r| r.heading.as_str()).collect();
        assert_eq!(
            headings,
            vec![
                "Total Results and Primary Results (Results)",
                "Secondary Results (Results)",
                "Results Coverage for Single Selection (Results)",
                "Redundance Results Coverage for Single Selection (Results)",
                "Result Rules for Primary Results (Results)",
                "Result Urls (Results)",
                "Result Base Fragments (Results)",
            ]
        );
        assert!(report.iter().all(ValidationResult::is_valid));
    }
}
