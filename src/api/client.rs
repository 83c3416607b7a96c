use crate::core::config::ClientConfig;
use crate::core::error::{MeetingError, Result};
use reqwest::header::HeaderMap;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Longest response body kept in an `HttpStatus` error
const MAX_ERROR_BODY: usize = 1024;

/// HTTP client for the meeting service REST API
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl ServiceClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint =
            Url::parse(endpoint).map_err(|e| MeetingError::InvalidEndpoint(format!("{endpoint}: {e}")))?;

        if !matches!(endpoint.scheme(), "http" | "https") || endpoint.cannot_be_a_base() {
            return Err(MeetingError::InvalidEndpoint(endpoint.to_string()));
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(&config.endpoint, Duration::from_secs(config.timeout_secs))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Append path segments to the endpoint, percent-encoding each one
    pub fn service_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| MeetingError::InvalidEndpoint(self.endpoint.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn get<R: DeserializeOwned>(&self, url: Url, headers: HeaderMap) -> Result<R> {
        let response = self.send(Method::GET, url, None, headers).await?;
        decode(response).await
    }

    pub async fn post<B, R>(&self, url: Url, body: &B, headers: HeaderMap) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_vec(body)?;
        let response = self.send(Method::POST, url, Some(body), headers).await?;
        decode(response).await
    }

    /// POST whose response body, if any, is discarded
    pub async fn post_no_content<B>(&self, url: Url, body: &B, headers: HeaderMap) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body)?;
        self.send(Method::POST, url, Some(body), headers).await?;
        Ok(())
    }

    pub async fn put<B, R>(&self, url: Url, body: &B, headers: HeaderMap) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_vec(body)?;
        let response = self.send(Method::PUT, url, Some(body), headers).await?;
        decode(response).await
    }

    /// Execute one request; any non-2xx status becomes `HttpStatus`
    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
        headers: HeaderMap,
    ) -> Result<reqwest::Response> {
        debug!(method = %method, url = %url, "Sending request to meeting service");

        let mut request = self.client.request(method.clone(), url.clone()).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(method = %method, url = %url, error = %e, "Request to meeting service failed");
            MeetingError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let mut body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(url = %url, error = %e, "Failed to read error response body");
                    String::new()
                }
            };
            truncate(&mut body, MAX_ERROR_BODY);
            warn!(
                method = %method,
                url = %url,
                status = status.as_u16(),
                "Meeting service returned error status"
            );
            return Err(MeetingError::HttpStatus { status, body });
        }

        debug!(method = %method, url = %url, status = status.as_u16(), "Request completed");
        Ok(response)
    }
}

async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn truncate(body: &mut String, max: usize) {
    if body.len() <= max {
        return;
    }
    let mut end = max;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body.truncate(end);
}
