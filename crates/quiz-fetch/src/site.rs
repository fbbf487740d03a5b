//! Site document loading.
//!
//! A site is either a base URL (documents are fetched with `GET <site>/<name>`)
//! or a local directory holding the same three files.

use std::fmt;
use std::path::{Path, PathBuf};

use quiz_core::{Document, DocumentKind, QuizDocuments};

use crate::{FetchError, SiteClient, http::check_response};

/// Where a site's documents live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteLocation {
    /// Base URL, always ending in `/`.
    Remote(String),
    Local(PathBuf),
}

impl SiteLocation {
    /// Classify a site argument. Existing directories win over URLs.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidSite`] if `site` is neither an `http(s)`
    /// URL nor an existing directory.
    pub fn parse(site: &str) -> Result<Self, FetchError> {
        let site = site.trim();
        let path = Path::new(site);
        if !site.is_empty() && path.is_dir() {
            return Ok(Self::Local(path.to_path_buf()));
        }
        if site.starts_with("http://") || site.starts_with("https://") {
            let mut base = site.to_string();
            if !base.ends_with('/') {
                base.push('/');
            }
            return Ok(Self::Remote(base));
        }
        Err(FetchError::InvalidSite(site.to_string()))
    }

    /// URL or path of one document.
    #[must_use]
    pub fn document_path(&self, kind: DocumentKind) -> String {
        match self {
            Self::Remote(base) => format!("{base}{}", kind.file_name()),
            Self::Local(dir) => dir.join(kind.file_name()).display().to_string(),
        }
    }

    /// Location of `results.json`, used to resolve site-relative URLs.
    #[must_use]
    pub fn results_path(&self) -> String {
        self.document_path(DocumentKind::Results)
    }
}

impl fmt::Display for SiteLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(base) => f.write_str(base),
            Self::Local(dir) => write!(f, "{}", dir.display()),
        }
    }
}

impl SiteClient {
    /// Fetch and parse one document.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails, the server answers with a
    /// non-success status, the file cannot be read, or the body is not a
    /// document export.
    pub async fn fetch_document(
        &self,
        site: &SiteLocation,
        kind: DocumentKind,
    ) -> Result<Document, FetchError> {
        let text = match site {
            SiteLocation::Remote(_) => {
                let url = site.document_path(kind);
                tracing::debug!(%url, "fetching document");
                let resp = check_response(self.http.get(&url).send().await?).await?;
                resp.text().await?
            }
            SiteLocation::Local(dir) => {
                let path = dir.join(kind.file_name());
                tracing::debug!(path = %path.display(), "reading document");
                tokio::fs::read_to_string(&path).await?
            }
        };
        Ok(Document::from_json_str(&text)?)
    }

    /// Like [`Self::fetch_document`], but a failure is logged and reported
    /// as "unavailable".
    pub async fn load_document(&self, site: &SiteLocation, kind: DocumentKind) -> Option<Document> {
        match self.fetch_document(site, kind).await {
            Ok(document) => Some(document),
            Err(error) => {
                tracing::warn!(%site, document = %kind, %error, "document unavailable");
                None
            }
        }
    }

    /// Load all three documents concurrently.
    pub async fn fetch_site_documents(&self, site: &SiteLocation) -> QuizDocuments {
        let (questions, strings, results) = tokio::join!(
            self.load_document(site, DocumentKind::Questions),
            self.load_document(site, DocumentKind::Strings),
            self.load_document(site, DocumentKind::Results),
        );
        QuizDocuments {
            questions,
            strings,
            results,
        }
    }
}
