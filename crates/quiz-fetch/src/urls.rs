//! URL liveness checks for results sheets.
//!
//! Every URL-looking cell in a sheet is HEAD-requested. On production sites
//! each URL is also checked on the live mirror, and the two `Last-Modified`
//! values are compared to spot stale caches.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tokio::{sync::Semaphore, task::JoinSet};

use quiz_core::{Document, RESULT_DESTINATION_SHEET, Row};

use crate::{SiteClient, http::last_modified};

const STATUS_OK: u16 = 200;
/// Reported for unreachable URLs and failed mirror comparisons.
const STATUS_NOT_FOUND: u16 = 404;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CacheStatus {
    #[serde(rename = "✅")]
    Fresh,
    #[serde(rename = "❌")]
    Stale,
}

impl CacheStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fresh => "✅",
            Self::Stale => "❌",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlStatus {
    pub url: String,
    pub status: u16,
    #[serde(rename = "last-modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Only set when the URL was compared against its live mirror.
    #[serde(rename = "cache-status", skip_serializing_if = "Option::is_none")]
    pub cache_status: Option<CacheStatus>,
}

impl UrlStatus {
    fn unreachable(url: String) -> Self {
        Self {
            url,
            status: STATUS_NOT_FOUND,
            last_modified: None,
            cache_status: None,
        }
    }

    /// Fold a mirror check into this one.
    #[must_use]
    pub fn compared_with(self, mirror: &Self) -> Self {
        let both_ok = self.status == STATUS_OK && mirror.status == STATUS_OK;
        let cache_status = if self.last_modified == mirror.last_modified {
            CacheStatus::Fresh
        } else {
            CacheStatus::Stale
        };
        Self {
            status: if both_ok { STATUS_OK } else { STATUS_NOT_FOUND },
            cache_status: Some(cache_status),
            ..self
        }
    }
}

/// `scheme://host` of an absolute URL.
fn origin(url: &str) -> Option<&str> {
    let scheme_end = url.find("://")? + 3;
    let host_end = url[scheme_end..]
        .find('/')
        .map_or(url.len(), |i| scheme_end + i);
    Some(&url[..host_end])
}

fn push_unique(urls: &mut Vec<String>, seen: &mut HashSet<String>, url: String) {
    if seen.insert(url.clone()) {
        urls.push(url);
    }
}

/// Collect the URLs referenced by a sheet, in first-seen order.
///
/// Cells starting with `http` or `/` count as URLs. Comma-separated cells are
/// split, and site-relative paths are resolved against the origin of
/// `results_path`. Relative paths stay as they are when `results_path` has no
/// origin (local sites).
#[must_use]
pub fn extract_urls(rows: &[Row], results_path: &str) -> Vec<String> {
    let base = origin(results_path);
    let resolve = |part: &str| match base {
        Some(base) if part.starts_with('/') => format!("{base}{part}"),
        _ => part.to_string(),
    };

    let mut seen = HashSet::new();
    let mut urls = Vec::new();
    for row in rows {
        for (_, value) in row.cells() {
            if !(value.starts_with("http") || value.starts_with('/')) {
                continue;
            }
            for part in value.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                push_unique(&mut urls, &mut seen, resolve(part));
            }
        }
    }
    urls
}

async fn head(client: &reqwest::Client, url: &str) -> UrlStatus {
    match client.head(url).send().await {
        Ok(resp) => UrlStatus {
            url: url.to_string(),
            status: resp.status().as_u16(),
            last_modified: last_modified(&resp),
            cache_status: None,
        },
        Err(error) => {
            tracing::debug!(url, %error, "HEAD request failed");
            UrlStatus::unreachable(url.to_string())
        }
    }
}

impl SiteClient {
    /// HEAD one URL. Transport failures come back as status 404.
    pub async fn fetch_headers(&self, url: &str) -> UrlStatus {
        head(&self.http, url).await
    }

    /// Whether URLs in `sheet` get compared against the live mirror.
    #[must_use]
    pub fn compares_mirror(&self, sheet: &str, results_path: &str) -> bool {
        sheet != RESULT_DESTINATION_SHEET
            && self.urls.can_compare_mirror()
            && results_path.contains(self.urls.production_host.as_str())
    }

    #[must_use]
    pub fn mirror_url(&self, url: &str) -> String {
        url.replace(self.urls.production_host.as_str(), &self.urls.live_host)
    }

    /// Check every URL in `sheet`, highest status first.
    ///
    /// Requests run with bounded concurrency. URLs with the same status keep
    /// the order in which they appear in the sheet.
    pub async fn check_sheet_urls(
        &self,
        results: &Document,
        sheet: &str,
        results_path: &str,
    ) -> Vec<UrlStatus> {
        let urls = extract_urls(results.rows(sheet), results_path);
        let compare = self.compares_mirror(sheet, results_path);
        tracing::debug!(sheet, count = urls.len(), compare, "checking sheet URLs");

        let total = urls.len();
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut set = JoinSet::new();
        for (idx, url) in urls.into_iter().enumerate() {
            let client = self.http.clone();
            let sem = semaphore.clone();
            let mirror = compare.then(|| self.mirror_url(&url));
            set.spawn(async move {
                let Ok(_permit) = sem.acquire_owned().await else {
                    return (idx, UrlStatus::unreachable(url));
                };
                let primary = head(&client, &url).await;
                let status = match mirror {
                    Some(mirror) => primary.compared_with(&head(&client, &mirror).await),
                    None => primary,
                };
                (idx, status)
            });
        }

        let mut slots: Vec<Option<UrlStatus>> = vec![None; total];
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((idx, status)) => slots[idx] = Some(status),
                Err(error) => tracing::warn!(%error, "URL check task failed"),
            }
        }

        let mut checked: Vec<UrlStatus> = slots.into_iter().flatten().collect();
        checked.sort_by(|a, b| b.status.cmp(&a.status));
        checked
    }
}
