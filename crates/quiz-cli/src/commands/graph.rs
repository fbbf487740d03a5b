use quiz_core::DocumentKind;
use quiz_engine::build_flow_graph;

use crate::cli::{GlobalFlags, OutputFormat, SiteArgs};
use crate::commands::Outcome;
use crate::context::AppContext;
use crate::output::output;

/// Handle `quizlint graph`.
pub async fn handle(args: &SiteArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<Outcome> {
    let site = ctx.site(args.site.as_deref())?;
    let (questions, strings) = tokio::try_join!(
        ctx.document(&site, DocumentKind::Questions),
        ctx.document(&site, DocumentKind::Strings),
    )?;
    let graph = build_flow_graph(&questions, &strings);

    match flags.format {
        OutputFormat::Table => {
            output(&graph.nodes, flags.format)?;
            println!();
            output(&graph.edges, flags.format)?;
        }
        OutputFormat::Json | OutputFormat::Raw => output(&graph, flags.format)?,
    }
    Ok(Outcome::Clean)
}
