//! Quiz site selection.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_site() -> String {
    String::from("https://main--cc--adobecom.hlx.live/creativecloud/plan-recommender/")
}

fn default_known() -> Vec<String> {
    vec![
        String::from("https://main--milo--adobecom.hlx.live/drafts/quiz/quiz-2/"),
        String::from("https://www.adobe.com/creativecloud/plan-recommender/"),
        String::from("https://www.stage.adobe.com/products/photoshop/plan-recommender/"),
        String::from("https://main--cc--adobecom.hlx.live/creativecloud/plan-recommender/"),
        String::from("https://main--cc--adobecom.hlx.live/products/photoshop/plan-recommender/"),
    ]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SitesConfig {
    /// Site used when a command is given no explicit site.
    #[serde(default = "default_site")]
    pub default: String,

    /// Sites offered by `quizlint sites`.
    #[serde(default = "default_known")]
    pub known: Vec<String>,
}

impl Default for SitesConfig {
    fn default() -> Self {
        Self {
            default: default_site(),
            known: default_known(),
        }
    }
}

impl SitesConfig {
    /// Pick the explicit site if given, otherwise the configured default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoSite`] when neither is set.
    pub fn resolve(&self, explicit: Option<&str>) -> Result<String, ConfigError> {
        let site = explicit.unwrap_or(&self.default).trim();
        if site.is_empty() {
            return Err(ConfigError::NoSite);
        }
        Ok(site.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_site_wins() {
        let config = SitesConfig::default();
        let site = config.resolve(Some("https://example.com/quiz/")).expect("site");
        assert_eq!(site, "https://example.com/quiz/");
    }

    #[test]
    fn falls_back_to_default() {
        let config = SitesConfig::default();
        assert_eq!(config.resolve(None).expect("site"), default_site());
        assert_eq!(config.known.len(), 5);
    }

    #[test]
    fn blank_default_without_explicit_site_is_rejected() {
        let config = SitesConfig {
            default: "  ".to_string(),
            known: Vec::new(),
        };
        let err = config.resolve(None).expect_err("no site available");
        assert!(matches!(err, ConfigError::NoSite));
        assert_eq!(
            err.to_string(),
            "no quiz site given and sites.default is unset (pass a site URL or set QUIZLINT_SITES__DEFAULT)"
        );
        assert!(config.resolve(Some("https://example.com/quiz/")).is_ok());
    }
}
