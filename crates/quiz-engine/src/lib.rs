//! # quiz-engine
//!
//! The validation engine for plan-recommender quiz content.
//!
//! Every check is a pure function from in-memory documents to a
//! [`ValidationResult`](quiz_core::ValidationResult). Checks never fail: a
//! content problem is an `invalid` record, never an error. The two batches
//! run their checks in a fixed order which is also the display order:
//!
//! - [`content::perform_validations`] over `questions.json` + `strings.json`
//! - [`results::perform_validation_results`] over all three documents
//!
//! [`report::validate_site`] guards both batches on document availability,
//! and [`graph::build_flow_graph`] renders the question/option flow.

pub mod combinations;
pub mod content;
pub mod graph;
pub mod report;
pub mod results;

mod parse;

pub use combinations::{
    Combinations, Selection, first_question_combinations, first_question_singles,
    generate_combinations, question_combinations, single_combinations,
};
pub use content::{ContentCheck, QuestionTable, perform_validations};
pub use graph::{FlowEdge, FlowGraph, FlowNode, build_flow_graph};
pub use report::{ReportSummary, SiteReport, validate_site};
pub use results::{ResultsCheck, perform_validation_results};
