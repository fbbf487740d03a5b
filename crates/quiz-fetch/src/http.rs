//! Shared HTTP response helpers.

use crate::error::FetchError;

/// Return the response unchanged on success, otherwise
/// [`FetchError::Api`] with the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, FetchError> {
    if !resp.status().is_success() {
        return Err(FetchError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// `Last-Modified` header value, if present and ASCII.
pub fn last_modified(resp: &reqwest::Response) -> Option<String> {
    resp.headers()
        .get(reqwest::header::LAST_MODIFIED)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[test]
    fn last_modified_from_header() {
        let resp = reqwest::Response::from(
            ::http::Response::builder()
                .status(200)
                .header("Last-Modified", "Wed, 21 Oct 2026 07:28:00 GMT")
                .body("")
                .unwrap(),
        );
        assert_eq!(
            last_modified(&resp).as_deref(),
            Some("Wed, 21 Oct 2026 07:28:00 GMT")
        );
    }

    #[test]
    fn last_modified_missing_header() {
        assert_eq!(last_modified(&mock_response(200, "")), None);
    }

    #[tokio::test]
    async fn check_response_api_error_keeps_body() {
        let resp = mock_response(404, "not found");
        let err = check_response(resp).await.unwrap_err();
        match err {
            FetchError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }
}
