use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands::{self, Outcome, validate::Batch};
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: &Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<Outcome> {
    match command {
        Commands::Validate(args) => commands::validate::handle(args, Batch::All, ctx, flags).await,
        Commands::Content(args) => commands::validate::handle(args, Batch::Content, ctx, flags).await,
        Commands::Results(args) => commands::validate::handle(args, Batch::Results, ctx, flags).await,
        Commands::Urls(args) => commands::urls::handle(args, ctx, flags).await,
        Commands::Graph(args) => commands::graph::handle(args, ctx, flags).await,
        Commands::Combinations(args) => commands::combinations::handle(args, ctx, flags).await,
        Commands::Sites => commands::sites::handle(ctx, flags),
    }
}
