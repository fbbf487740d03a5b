use serde::Serialize;

use quiz_core::{DocumentKind, QuizDocuments, ValidationResult};
use quiz_engine::ReportSummary;
use quiz_engine::report::{run_content_batch, run_results_batch};

use crate::cli::{GlobalFlags, OutputFormat, SiteArgs};
use crate::commands::Outcome;
use crate::context::AppContext;
use crate::output::output;

/// Which validation batches a command runs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Batch {
    All,
    Content,
    Results,
}

impl Batch {
    const fn includes_content(self) -> bool {
        matches!(self, Self::All | Self::Content)
    }

    const fn includes_results(self) -> bool {
        matches!(self, Self::All | Self::Results)
    }
}

#[derive(Debug, Serialize)]
struct ValidateResponse {
    site: String,
    summary: ReportSummary,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    unavailable: Vec<DocumentKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<Vec<ValidationResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    results: Option<Vec<ValidationResult>>,
}

impl ValidateResponse {
    fn records(&self) -> Vec<&ValidationResult> {
        self.content
            .iter()
            .chain(self.results.iter())
            .flatten()
            .collect()
    }
}

fn build_response(site: String, documents: &QuizDocuments, batch: Batch) -> ValidateResponse {
    let content = batch.includes_content().then(|| run_content_batch(documents));
    let results = batch.includes_results().then(|| run_results_batch(documents));
    let summary = ReportSummary::from_records(content.iter().chain(results.iter()).flatten());
    ValidateResponse {
        site,
        summary,
        unavailable: documents.missing(),
        content,
        results,
    }
}

/// Handle `quizlint validate`, `quizlint content` and `quizlint results`.
pub async fn handle(
    args: &SiteArgs,
    batch: Batch,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<Outcome> {
    let site = ctx.site(args.site.as_deref())?;
    let documents = ctx.documents(&site).await?;
    let response = build_response(site.to_string(), &documents, batch);

    match flags.format {
        OutputFormat::Table => {
            output(&response.records(), flags.format)?;
            if !flags.quiet {
                let summary = response.summary;
                println!("\n{}/{} checks passed", summary.valid, summary.total);
                for kind in &response.unavailable {
                    println!("{kind} unavailable");
                }
            }
        }
        OutputFormat::Json | OutputFormat::Raw => output(&response, flags.format)?,
    }

    Ok(Outcome::from_failures(response.summary.has_failures()))
}
