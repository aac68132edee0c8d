//! Deadline-bounded fetch of the OVATION payload.

use crate::error::AuroraError;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Identifies this adapter to the SWPC service.
pub const OVATION_USER_AGENT: &str = "ioBroker-aurora-borealis";

/// Hard deadline for one fetch. A hung SWPC endpoint must never stall the
/// report cycle; dropping the timed-out future cancels the request.
pub const FETCH_TIMEOUT: Duration = Duration::from_millis(10_000);

/// A raw HTTP response, decoupled from any particular client.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Seam between the fetch logic and the actual HTTP client, so tests can
/// substitute canned or never-resolving responses.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, user_agent: &str) -> Result<HttpResponse, AuroraError>;
}

/// Production transport backed by a shared reqwest client.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, AuroraError> {
        Ok(ReqwestTransport {
            client: reqwest::Client::builder().build()?,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, user_agent: &str) -> Result<HttpResponse, AuroraError> {
        let resp = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, user_agent)
            .send()
            .await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(HttpResponse { status, body })
    }
}

/// Issues one GET against the OVATION endpoint and parses the body as
/// untyped JSON. Shape validation is the extractor's job, not ours.
///
/// Non-2xx answers become [`AuroraError::Fetch`] ("NOAA HTTP <status>"),
/// an expired deadline becomes [`AuroraError::Timeout`]; anything else the
/// transport or JSON parser reports passes through unchanged.
pub async fn fetch_ovation(
    transport: &dyn Transport,
    url: &str,
    timeout: Duration,
) -> Result<Value, AuroraError> {
    log::debug!("fetching ovation payload from {url}");
    let response = tokio::time::timeout(timeout, transport.get(url, OVATION_USER_AGENT))
        .await
        .map_err(|_| AuroraError::Timeout)??;

    if !(200..300).contains(&response.status) {
        return Err(AuroraError::Fetch(response.status));
    }

    Ok(serde_json::from_str(&response.body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records the request and replays a canned response.
    struct CannedTransport {
        status: u16,
        body: String,
        seen: Mutex<Vec<(String, String)>>,
    }

    impl CannedTransport {
        fn new(status: u16, body: &str) -> Self {
            CannedTransport {
                status,
                body: body.to_string(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn get(&self, url: &str, user_agent: &str) -> Result<HttpResponse, AuroraError> {
            self.seen
                .lock()
                .unwrap()
                .push((url.to_string(), user_agent.to_string()));
            Ok(HttpResponse {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }

    /// Simulates a hung endpoint: the future never resolves.
    struct StalledTransport;

    #[async_trait]
    impl Transport for StalledTransport {
        async fn get(&self, _url: &str, _user_agent: &str) -> Result<HttpResponse, AuroraError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn fetches_json_with_user_agent_header() {
        let transport = CannedTransport::new(200, r#"{"coordinates": [[0, 0, 77]]}"#);
        let payload = fetch_ovation(&transport, "https://example.invalid/noaa", FETCH_TIMEOUT)
            .await
            .unwrap();

        assert_eq!(payload, json!({"coordinates": [[0, 0, 77]]}));
        let seen = transport.seen.lock().unwrap();
        assert_eq!(
            seen.as_slice(),
            &[(
                "https://example.invalid/noaa".to_string(),
                OVATION_USER_AGENT.to_string()
            )]
        );
    }

    #[tokio::test]
    async fn non_ok_status_names_the_status_code() {
        let transport = CannedTransport::new(503, "unavailable");
        let err = fetch_ovation(&transport, "https://example.invalid/noaa", FETCH_TIMEOUT)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "NOAA HTTP 503");
    }

    #[tokio::test]
    async fn stalled_endpoint_hits_the_deadline() {
        let err = fetch_ovation(
            &StalledTransport,
            "https://example.invalid/noaa",
            Duration::from_millis(10),
        )
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), "NOAA request timeout");
    }

    #[tokio::test]
    async fn unparseable_body_propagates_the_json_error() {
        let transport = CannedTransport::new(200, "<html>not json</html>");
        let err = fetch_ovation(&transport, "https://example.invalid/noaa", FETCH_TIMEOUT)
            .await
            .unwrap_err();

        assert!(matches!(err, AuroraError::Json(_)));
    }
}
