use clap::{Args, Subcommand};

use quiz_core::RESULT_DESTINATION_SHEET;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run content and results checks.
    Validate(SiteArgs),
    /// Run content checks (questions.json + strings.json).
    Content(SiteArgs),
    /// Run results checks (all three documents).
    Results(SiteArgs),
    /// Check liveness of the URLs in a results sheet.
    Urls(UrlsArgs),
    /// Print the question/option flow graph.
    Graph(SiteArgs),
    /// Enumerate answer combinations for a question.
    Combinations(CombinationsArgs),
    /// List configured sites.
    Sites,
}

#[derive(Clone, Debug, Args)]
pub struct SiteArgs {
    /// Site base URL or local directory (defaults to `sites.default`)
    pub site: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct UrlsArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Results sheet to scan for URLs
    #[arg(long, default_value = RESULT_DESTINATION_SHEET)]
    pub sheet: String,

    /// Ask the configured status service instead of sending HEAD requests
    #[arg(long)]
    pub service: bool,
}

#[derive(Clone, Debug, Args)]
pub struct CombinationsArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Question ID (defaults to the first authored question)
    #[arg(long)]
    pub question: Option<String>,
}
