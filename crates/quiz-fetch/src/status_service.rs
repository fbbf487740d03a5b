//! Client for a remote URL status-lookup service.
//!
//! The service takes `POST {"urls": [...]}` and answers `{"data": [...]}`
//! with one record per URL. Requests are sent in batches of
//! `urls.batch_size`; a failed batch is logged and contributes no records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{FetchError, SiteClient, http::check_response};

#[derive(Serialize)]
struct StatusRequest<'a> {
    urls: &'a [String],
}

#[derive(Deserialize)]
struct StatusResponse {
    #[serde(default)]
    data: Vec<ServiceRecord>,
}

/// One record returned by the status service.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServiceRecord {
    pub url: String,
    /// Whatever else the service reports (status, redirects, timings).
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl SiteClient {
    /// Look up statuses for `urls`, one request per batch.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::StatusServiceDisabled`] if no endpoint is
    /// configured. Individual batch failures are logged, not returned.
    pub async fn lookup_url_statuses(
        &self,
        urls: &[String],
    ) -> Result<Vec<ServiceRecord>, FetchError> {
        if !self.urls.is_status_service_configured() {
            return Err(FetchError::StatusServiceDisabled);
        }

        let mut records = Vec::new();
        for (batch, chunk) in urls.chunks(self.urls.batch_size.max(1)).enumerate() {
            match self.post_status_batch(chunk).await {
                Ok(found) => records.extend(found),
                Err(error) => {
                    tracing::warn!(batch, size = chunk.len(), %error, "status lookup failed");
                }
            }
        }
        Ok(records)
    }

    async fn post_status_batch(&self, urls: &[String]) -> Result<Vec<ServiceRecord>, FetchError> {
        let resp = self
            .http
            .post(&self.urls.status_service_url)
            .json(&StatusRequest { urls })
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let body: StatusResponse = resp
            .json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))?;
        Ok(body.data)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quiz_config::{HttpConfig, UrlsConfig};
    use serde_json::json;

    use super::*;

    #[test]
    fn request_body_shape() {
        let urls = vec!["https://a.example/".to_string()];
        let body = serde_json::to_value(StatusRequest { urls: &urls }).unwrap();
        assert_eq!(body, json!({ "urls": ["https://a.example/"] }));
    }

    #[test]
    fn response_keeps_extra_fields() {
        let body: StatusResponse = serde_json::from_value(json!({
            "data": [{ "url": "https://a.example/", "status": 301, "location": "https://b.example/" }]
        }))
        .unwrap();
        assert_eq!(body.data.len(), 1);
        assert_eq!(body.data[0].url, "https://a.example/");
        assert_eq!(body.data[0].fields["status"], 301);
    }

    #[test]
    fn missing_data_is_empty() {
        let body: StatusResponse = serde_json::from_value(json!({})).unwrap();
        assert!(body.data.is_empty());
    }

    #[tokio::test]
    async fn disabled_service_is_an_error() {
        let client = SiteClient::new(&HttpConfig::default(), UrlsConfig::default()).unwrap();
        let err = client
            .lookup_url_statuses(&["https://a.example/".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::StatusServiceDisabled));
    }
}
