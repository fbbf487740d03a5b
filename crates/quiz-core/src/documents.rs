//! The three documents a quiz site publishes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::table::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Questions,
    Strings,
    Results,
}

impl DocumentKind {
    pub const ALL: [Self; 3] = [Self::Questions, Self::Strings, Self::Results];

    /// File name relative to the site base URL.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Questions => "questions.json",
            Self::Strings => "strings.json",
            Self::Results => "results.json",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Whatever subset of a site's documents could be loaded.
///
/// `None` means "unavailable": the fetch failed or the file does not parse.
#[derive(Debug, Clone, Default)]
pub struct QuizDocuments {
    pub questions: Option<Document>,
    pub strings: Option<Document>,
    pub results: Option<Document>,
}

impl QuizDocuments {
    #[must_use]
    pub const fn get(&self, kind: DocumentKind) -> Option<&Document> {
        match kind {
            DocumentKind::Questions => self.questions.as_ref(),
            DocumentKind::Strings => self.strings.as_ref(),
            DocumentKind::Results => self.results.as_ref(),
        }
    }

    pub fn set(&mut self, kind: DocumentKind, document: Option<Document>) {
        match kind {
            DocumentKind::Questions => self.questions = document,
            DocumentKind::Strings => self.strings = document,
            DocumentKind::Results => self.results = document,
        }
    }

    /// Kinds that could not be loaded.
    #[must_use]
    pub fn missing(&self) -> Vec<DocumentKind> {
        DocumentKind::ALL
            .into_iter()
            .filter(|kind| self.get(*kind).is_none())
            .collect()
    }
}
