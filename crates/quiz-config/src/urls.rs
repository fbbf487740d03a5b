//! URL liveness checking settings.

use serde::{Deserialize, Serialize};

fn default_production_host() -> String {
    String::from("www.adobe.com")
}

fn default_live_host() -> String {
    String::from("main--cc--adobecom.hlx.live")
}

const fn default_batch_size() -> usize {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UrlsConfig {
    /// Host whose pages are compared against their live mirror.
    #[serde(default = "default_production_host")]
    pub production_host: String,

    /// Mirror host substituted for `production_host` in cache comparisons.
    #[serde(default = "default_live_host")]
    pub live_host: String,

    /// Remote status-lookup endpoint. Empty disables the service.
    #[serde(default)]
    pub status_service_url: String,

    /// URLs per status-lookup request.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

impl Default for UrlsConfig {
    fn default() -> Self {
        Self {
            production_host: default_production_host(),
            live_host: default_live_host(),
            status_service_url: String::new(),
            batch_size: default_batch_size(),
        }
    }
}

impl UrlsConfig {
    #[must_use]
    pub fn is_status_service_configured(&self) -> bool {
        !self.status_service_url.is_empty()
    }

    /// Whether mirror comparison is possible at all.
    #[must_use]
    pub fn can_compare_mirror(&self) -> bool {
        !self.production_host.is_empty() && !self.live_host.is_empty()
    }
}
