//! Answer-combination generator.
//!
//! For a starting question, enumerates every order-insensitive selection of
//! its options for each selection count from 1 up to the question's
//! `max-selections`.
//!
//! Record keys encode the position of each chosen option: position 1 is keyed
//! by the question ID itself (so a single selection lines up with the answer
//! column of a result row), later positions are keyed `<question>-<n>`.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use quiz_core::{Document, QUESTIONS_SHEET, Row};

use crate::parse::leading_int;

/// One generated selection: position key → option ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection(Row);

impl Selection {
    /// A row matches when every key of the selection holds an equal value in it.
    #[must_use]
    pub fn matches(&self, row: &Row) -> bool {
        self.0
            .cells()
            .all(|(key, value)| row.try_get(key) == Some(value))
    }

    /// Chosen option IDs in position order.
    #[must_use]
    pub fn options(&self) -> Vec<&str> {
        self.0.cells().map(|(_, option)| option).collect()
    }

    #[must_use]
    pub const fn as_row(&self) -> &Row {
        &self.0
    }
}

/// Key under which the option at 1-based `position` is stored.
#[must_use]
pub fn selection_key(question: &str, position: usize) -> String {
    if position <= 1 {
        question.to_string()
    } else {
        format!("{question}-{position}")
    }
}

/// Generated selections grouped by selection count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Combinations {
    question: String,
    max_selections: usize,
    by_count: Vec<Vec<Selection>>,
}

impl Combinations {
    /// Selections of exactly `count` options. Empty for counts that were not
    /// generated (zero, above `max-selections`, or above the option count).
    #[must_use]
    pub fn get(&self, count: usize) -> &[Selection] {
        count
            .checked_sub(1)
            .and_then(|index| self.by_count.get(index))
            .map_or(&[][..], Vec::as_slice)
    }

    /// Single-option selections (count `"1"`).
    #[must_use]
    pub fn single(&self) -> &[Selection] {
        self.get(1)
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub const fn max_selections(&self) -> usize {
        self.max_selections
    }

    /// Counts that produced at least one selection slot, in ascending order.
    pub fn counts(&self) -> impl Iterator<Item = (usize, &[Selection])> {
        self.by_count
            .iter()
            .enumerate()
            .map(|(index, selections)| (index + 1, selections.as_slice()))
    }

    /// Number of selections across all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.by_count.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl Serialize for Combinations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.by_count.len()))?;
        for (count, selections) in self.counts() {
            map.serialize_entry(&count.to_string(), selections)?;
        }
        map.end()
    }
}

/// Enumerate the selections for `start_question` in `questions`.
///
/// `max_selections` is the raw `max-selections` cell. When it is not a
/// positive integer the result is empty; when the question has no option
/// sheet every count is empty. Never fails.
#[must_use]
pub fn generate_combinations(
    questions: &Document,
    start_question: &str,
    max_selections: &str,
) -> Combinations {
    let max = leading_int(max_selections)
        .and_then(|value| usize::try_from(value).ok())
        .unwrap_or(0);

    let options: Vec<&str> = questions
        .rows(start_question)
        .iter()
        .map(|row| row.get("options"))
        .collect();

    let by_count = (1..=max.min(options.len()))
        .map(|count| {
            index_combinations(options.len(), count)
                .into_iter()
                .map(|indices| {
                    Selection(
                        indices
                            .iter()
                            .enumerate()
                            .map(|(position, &option)| {
                                (selection_key(start_question, position + 1), options[option])
                            })
                            .collect(),
                    )
                })
                .collect()
        })
        .collect();

    Combinations {
        question: start_question.to_string(),
        max_selections: max,
        by_count,
    }
}

/// Combinations for `question`, sized by its own `max-selections` cell.
///
/// `None` when the question is not listed in the `questions` sheet.
#[must_use]
pub fn question_combinations(questions: &Document, question: &str) -> Option<Combinations> {
    let row = questions
        .rows(QUESTIONS_SHEET)
        .iter()
        .find(|row| row.get("questions") == question)?;
    Some(generate_combinations(questions, question, row.get("max-selections")))
}

/// Combinations for the first authored question, or `None` when
/// `questions.json` has no question rows.
#[must_use]
pub fn first_question_combinations(questions: &Document) -> Option<Combinations> {
    let first = questions.rows(QUESTIONS_SHEET).first()?;
    Some(generate_combinations(
        questions,
        first.get("questions"),
        first.get("max-selections"),
    ))
}

/// Single-option selections for `question`, one per option row.
///
/// Matches [`Combinations::single`] for the same inputs without building the
/// higher counts, so it stays linear in the option count.
#[must_use]
pub fn single_combinations(
    questions: &Document,
    question: &str,
    max_selections: &str,
) -> Vec<Selection> {
    if !leading_int(max_selections).is_some_and(|max| max >= 1) {
        return Vec::new();
    }
    let key = selection_key(question, 1);
    questions
        .rows(question)
        .iter()
        .map(|row| Selection([(key.as_str(), row.get("options"))].into_iter().collect()))
        .collect()
}

/// Single-option selections for the first authored question, or `None` when
/// `questions.json` has no question rows.
#[must_use]
pub fn first_question_singles(questions: &Document) -> Option<Vec<Selection>> {
    let first = questions.rows(QUESTIONS_SHEET).first()?;
    Some(single_combinations(
        questions,
        first.get("questions"),
        first.get("max-selections"),
    ))
}

/// All `k`-element index subsets of `0..n` in lexicographic order.
fn index_combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    if k == 0 || k > n {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        out.push(indices.clone());

        let Some(pivot) = (0..k).rev().find(|&i| indices[i] != n - k + i) else {
            break;
        };
        indices[pivot] += 1;
        for i in pivot + 1..k {
            indices[i] = indices[i - 1] + 1;
        }
    }
    out
}
