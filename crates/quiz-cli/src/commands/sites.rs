use serde::Serialize;

use quiz_config::SitesConfig;

use crate::cli::GlobalFlags;
use crate::commands::Outcome;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SiteEntry<'a> {
    site: &'a str,
    default: bool,
}

/// Known sites plus the default, which is listed first if it is not already known.
fn entries(sites: &SitesConfig) -> Vec<SiteEntry<'_>> {
    let mut entries: Vec<SiteEntry<'_>> = sites
        .known
        .iter()
        .map(|site| SiteEntry {
            site,
            default: *site == sites.default,
        })
        .collect();
    if !sites.default.is_empty() && !entries.iter().any(|entry| entry.default) {
        entries.insert(
            0,
            SiteEntry {
                site: &sites.default,
                default: true,
            },
        );
    }
    entries
}

/// Handle `quizlint sites`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<Outcome> {
    output(&entries(&ctx.config.sites), flags.format)?;
    Ok(Outcome::Clean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_flagged_or_prepended() {
        let sites = SitesConfig {
            default: "https://b.example/".to_string(),
            known: vec!["https://a.example/".to_string(), "https://b.example/".to_string()],
        };
        let listed = entries(&sites);
        assert_eq!(listed.len(), 2);
        assert!(listed[1].default);

        let sites = SitesConfig {
            default: "https://c.example/".to_string(),
            known: vec!["https://a.example/".to_string()],
        };
        let listed = entries(&sites);
        assert_eq!(listed[0].site, "https://c.example/");
        assert!(listed[0].default);
        assert!(!listed[1].default);
    }
}
