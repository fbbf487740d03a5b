use quiz_core::DocumentKind;
use quiz_fetch::{UrlStatus, extract_urls};

use crate::cli::{GlobalFlags, UrlsArgs};
use crate::commands::Outcome;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

fn has_broken(statuses: &[UrlStatus]) -> bool {
    statuses.iter().any(|status| status.status != 200)
}

/// Handle `quizlint urls`.
pub async fn handle(args: &UrlsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<Outcome> {
    let site = ctx.site(args.site.site.as_deref())?;
    let results = ctx.document(&site, DocumentKind::Results).await?;
    results.require_sheet(DocumentKind::Results.file_name(), &args.sheet)?;
    let results_path = site.results_path();

    if args.service {
        let urls = extract_urls(results.rows(&args.sheet), &results_path);
        let progress = Progress::spinner(&format!("looking up {} URLs", urls.len()));
        let records = ctx.client.lookup_url_statuses(&urls).await?;
        progress.finish_clear();
        output(&records, flags.format)?;
        return Ok(Outcome::Clean);
    }

    let progress = Progress::spinner(&format!("checking URLs in '{}'", args.sheet));
    let statuses = ctx
        .client
        .check_sheet_urls(&results, &args.sheet, &results_path)
        .await;
    progress.finish_clear();

    output(&statuses, flags.format)?;
    Ok(Outcome::from_failures(has_broken(&statuses)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> UrlStatus {
        UrlStatus {
            url: "https://a.example/".to_string(),
            status: code,
            last_modified: None,
            cache_status: None,
        }
    }

    #[test]
    fn anything_but_ok_is_broken() {
        assert!(!has_broken(&[status(200), status(200)]));
        assert!(has_broken(&[status(200), status(301)]));
        assert!(!has_broken(&[]));
    }
}
