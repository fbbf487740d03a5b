use anyhow::Context;
use quiz_config::QuizConfig;
use quiz_core::{Document, DocumentKind, QuizDocuments};
use quiz_fetch::{SiteClient, SiteLocation};

use crate::progress::Progress;

/// Shared state for command handlers.
pub struct AppContext {
    pub config: QuizConfig,
    pub client: SiteClient,
}

impl AppContext {
    pub fn init(config: QuizConfig) -> anyhow::Result<Self> {
        let client = SiteClient::from_config(&config).context("failed to build HTTP client")?;
        Ok(Self { config, client })
    }

    /// Resolve the site argument, falling back to `sites.default`.
    pub fn site(&self, explicit: Option<&str>) -> anyhow::Result<SiteLocation> {
        let site = self.config.sites.resolve(explicit)?;
        Ok(SiteLocation::parse(&site)?)
    }

    /// Load every document the site publishes. Missing ones are `None`.
    pub async fn documents(&self, site: &SiteLocation) -> anyhow::Result<QuizDocuments> {
        let progress = Progress::spinner(&format!("loading {site}"));
        let documents = self.client.fetch_site_documents(site).await;
        progress.finish_clear();
        tracing::debug!(%site, missing = ?documents.missing(), "site documents loaded");

        if documents.missing().len() == DocumentKind::ALL.len() {
            anyhow::bail!("no quiz documents could be loaded from {site}");
        }
        Ok(documents)
    }

    /// Load one document, failing the command if it is unavailable.
    pub async fn document(&self, site: &SiteLocation, kind: DocumentKind) -> anyhow::Result<Document> {
        let progress = Progress::spinner(&format!("loading {}", site.document_path(kind)));
        let document = self.client.fetch_document(site, kind).await;
        progress.finish_clear();
        document.with_context(|| format!("failed to load {kind} from {site}"))
    }
}
