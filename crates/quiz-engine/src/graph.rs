//! Question/option flow graph.
//!
//! Turns `questions.json` + `strings.json` into nodes (questions and their
//! options, labelled from the strings document) and edges (question → option,
//! option → next question). Cross references that cannot be resolved are
//! logged and skipped; building the graph never fails.

use serde::Serialize;

use quiz_core::{Document, QUESTIONS_SHEET, Row, TERMINAL_MARKER};

/// Marker in an option's `next` column that restarts the quiz.
const RESET_MARKER: &str = "RESET";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FlowNode {
    Question {
        id: String,
        label: String,
        subtitle: String,
        btn_label: String,
        background_image: String,
        footer_fragment: String,
        min_selections: String,
        max_selections: String,
    },
    Option {
        id: String,
        /// Question the option belongs to.
        question: String,
        label: String,
        text: String,
        image: String,
        icon: Option<String>,
        next: String,
        reset: bool,
        result: bool,
    },
}

impl FlowNode {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Question { id, .. } | Self::Option { id, .. } => id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeHandle {
    /// Question → one of its options.
    NewOption,
    /// Option → the question it leads to.
    NextQuestion,
    /// Option → a question excluded by `NOT(...)`.
    Not,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub handle: EdgeHandle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

/// Option strings live in the strings sheet named after the question, keyed
/// by the same `options` column as `questions.json`.
fn option_strings<'a>(strings: &'a Document, question: &str, option: &str) -> Option<&'a Row> {
    strings
        .rows(question)
        .iter()
        .find(|row| row.get("options") == option)
}

fn first_non_empty(row: Option<&Row>, columns: &[&str]) -> Option<String> {
    let row = row?;
    columns
        .iter()
        .map(|column| row.get(column))
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

/// Target of a `NOT(<question>)` step, if the step is one.
fn negated_target(step: &str) -> Option<Option<&str>> {
    if !step.contains("NOT(") {
        return None;
    }
    let open = step.find('(')?;
    let inner = &step[open + 1..];
    Some(inner.find(')').map(|close| &inner[..close]))
}

#[must_use]
pub fn build_flow_graph(questions: &Document, strings: &Document) -> FlowGraph {
    let mut graph = FlowGraph::default();

    for question in questions.rows(QUESTIONS_SHEET) {
        let question_id = question.get("questions");
        let Some(question_strings) = strings
            .rows(QUESTIONS_SHEET)
            .iter()
            .find(|row| row.get("q") == question_id)
        else {
            tracing::warn!(question = question_id, "no string data found for question; skipping");
            continue;
        };

        graph.nodes.push(FlowNode::Question {
            id: question_id.to_string(),
            label: question_strings.get("heading").to_string(),
            subtitle: question_strings.get("sub-head").to_string(),
            btn_label: question_strings.get("btn").to_string(),
            background_image: question_strings.get("background").to_string(),
            footer_fragment: question_strings.get("footerFragment").to_string(),
            min_selections: question.get("min-selections").to_string(),
            max_selections: question.get("max-selections").to_string(),
        });

        for option in questions.rows(question_id) {
            let option_id = option.get("options");
            let texts = option_strings(strings, question_id, option_id);
            if texts.is_none() {
                tracing::debug!(question = question_id, option = option_id, "no string data for option");
            }
            let text_of = |column: &str| texts.map(|row| row.get(column)).unwrap_or("").to_string();
            let next = option.get("next");

            graph.nodes.push(FlowNode::Option {
                id: option_id.to_string(),
                question: question_id.to_string(),
                label: text_of("title"),
                text: text_of("text"),
                image: text_of("image"),
                icon: first_non_empty(texts, &["icon", "icon-tablet", "icon-desktop"]),
                next: next.to_string(),
                reset: next.contains(RESET_MARKER),
                result: next.contains(TERMINAL_MARKER),
            });

            graph.edges.push(FlowEdge {
                id: format!("e{question_id}-{option_id}"),
                source: question_id.to_string(),
                target: option_id.to_string(),
                handle: EdgeHandle::NewOption,
            });

            for step in next.split(',').map(str::trim).filter(|step| !step.is_empty()) {
                match negated_target(step) {
                    Some(Some(target)) => graph.edges.push(FlowEdge {
                        id: format!("e{option_id}-not-{target}"),
                        source: option_id.to_string(),
                        target: target.to_string(),
                        handle: EdgeHandle::Not,
                    }),
                    Some(None) => {
                        tracing::warn!(option = option_id, step, "unterminated NOT(...) step; skipping");
                    }
                    None => graph.edges.push(FlowEdge {
                        id: format!("e{option_id}-{step}"),
                        source: option_id.to_string(),
                        target: step.to_string(),
                        handle: EdgeHandle::NextQuestion,
                    }),
                }
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quiz_core::Table;
    use serde_json::json;

    use super::*;

    fn questions() -> Document {
        Document::try_from(json!({
            "questions": { "data": [
                { "questions": "q1", "min-selections": "1", "max-selections": "2" },
                { "questions": "q2", "min-selections": "1", "max-selections": "1" },
                { "questions": "orphan", "min-selections": "1", "max-selections": "1" }
            ]},
            "q1": { "data": [
                { "options": "photo", "next": "q2" },
                { "options": "video", "next": "q2,NOT(q3)" }
            ]},
            "q2": { "data": [
                { "options": "solo", "next": "RESULT" },
                { "options": "team", "next": "RESET" }
            ]}
        }))
        .expect("fixture should parse")
    }

    fn strings() -> Document {
        Document::try_from(json!({
            "questions": { "data": [
                { "q": "q1", "heading": "What do you make?", "sub-head": "Pick two", "btn": "Next" },
                { "q": "q2", "heading": "Who works on it?" }
            ]},
            "q1": { "data": [
                { "options": "photo", "title": "Photos", "icon-tablet": "/icons/photo.svg" }
            ]}
        }))
        .expect("fixture should parse")
    }

    #[test]
    fn builds_question_and_option_nodes() {
        let graph = build_flow_graph(&questions(), &strings());
        let ids: Vec<&str> = graph.nodes.iter().map(FlowNode::id).collect();
        assert_eq!(ids, vec!["q1", "photo", "video", "q2", "solo", "team"]);

        match &graph.nodes[1] {
            FlowNode::Option { label, icon, result, .. } => {
                assert_eq!(label, "Photos");
                assert_eq!(icon.as_deref(), Some("/icons/photo.svg"));
                assert!(!result);
            }
            other => panic!("expected option node, got {other:?}"),
        }
        match &graph.nodes[2] {
            FlowNode::Option { label, icon, .. } => {
                assert_eq!(label, "");
                assert_eq!(icon, &None);
            }
            other => panic!("expected option node, got {other:?}"),
        }
        assert!(matches!(&graph.nodes[4], FlowNode::Option { result: true, reset: false, .. }));
        assert!(matches!(&graph.nodes[5], FlowNode::Option { reset: true, .. }));
    }

    #[test]
    fn question_without_strings_is_skipped() {
        let graph = build_flow_graph(&questions(), &strings());
        assert!(graph.nodes.iter().all(|node| node.id() != "orphan"));
    }

    #[test]
    fn builds_edges_including_negations() {
        let graph = build_flow_graph(&questions(), &strings());
        let edges: Vec<(&str, EdgeHandle)> = graph
            .edges
            .iter()
            .map(|edge| (edge.id.as_str(), edge.handle))
            .collect();
        assert_eq!(
            edges,
            vec![
                ("eq1-photo", EdgeHandle::NewOption),
                ("ephoto-q2", EdgeHandle::NextQuestion),
                ("eq1-video", EdgeHandle::NewOption),
                ("evideo-q2", EdgeHandle::NextQuestion),
                ("evideo-not-q3", EdgeHandle::Not),
                ("eq2-solo", EdgeHandle::NewOption),
                ("esolo-RESULT", EdgeHandle::NextQuestion),
                ("eq2-team", EdgeHandle::NewOption),
                ("eteam-RESET", EdgeHandle::NextQuestion),
            ]
        );
    }

    #[test]
    fn unterminated_negation_is_skipped() {
        let questions = Document::new()
            .with_sheet(
                QUESTIONS_SHEET,
                Table::from_rows(vec![[("questions", "q1")].into_iter().collect()]),
            )
            .with_sheet(
                "q1",
                Table::from_rows(vec![[("options", "a"), ("next", "NOT(q2")].into_iter().collect()]),
            );
        let strings = Document::new().with_sheet(
            QUESTIONS_SHEET,
            Table::from_rows(vec![[("q", "q1")].into_iter().collect()]),
        );
        let graph = build_flow_graph(&questions, &strings);
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].handle, EdgeHandle::NewOption);
    }
}
