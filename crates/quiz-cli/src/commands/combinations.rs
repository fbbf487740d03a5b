use anyhow::Context;
use serde::Serialize;

use quiz_core::DocumentKind;
use quiz_engine::{Combinations, first_question_combinations, question_combinations};

use crate::cli::{CombinationsArgs, GlobalFlags, OutputFormat};
use crate::commands::Outcome;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct CombinationRow {
    count: usize,
    options: String,
}

fn table_rows(combinations: &Combinations) -> Vec<CombinationRow> {
    combinations
        .counts()
        .flat_map(|(count, selections)| {
            selections.iter().map(move |selection| CombinationRow {
                count,
                options: selection.options().join(", "),
            })
        })
        .collect()
}

/// Handle `quizlint combinations`.
pub async fn handle(
    args: &CombinationsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<Outcome> {
    let site = ctx.site(args.site.site.as_deref())?;
    let questions = ctx.document(&site, DocumentKind::Questions).await?;

    let combinations = match args.question.as_deref() {
        Some(question) => question_combinations(&questions, question)
            .with_context(|| format!("question '{question}' is not listed in questions.json"))?,
        None => first_question_combinations(&questions)
            .context("questions.json has no question rows")?,
    };

    match flags.format {
        OutputFormat::Table => output(&table_rows(&combinations), flags.format)?,
        OutputFormat::Json | OutputFormat::Raw => output(&combinations, flags.format)?,
    }
    Ok(Outcome::Clean)
}
