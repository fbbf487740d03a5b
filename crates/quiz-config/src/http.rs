//! HTTP client settings.

use serde::{Deserialize, Serialize};

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    String::from("quizlint/0.1")
}

const fn default_concurrency() -> usize {
    8
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum HEAD requests in flight while checking URLs.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            concurrency: default_concurrency(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.user_agent, "quizlint/0.1");
        assert_eq!(config.concurrency, 8);
    }
}
