//! Default HTTP clients backed by reqwest (enabled by the `http` feature).

use beacon_core::config::TransportConfig;
use beacon_core::errors::TransportError;
use beacon_core::traits::{AsyncHttpClient, HttpClient, PostRequest};
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Convert a reqwest error into a TransportError::Network.
fn net_err(e: reqwest::Error) -> TransportError {
    TransportError::Network {
        reason: e.to_string(),
    }
}

fn check_status(status: StatusCode, url: &str) -> Result<(), TransportError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(TransportError::Status {
            status: status.as_u16(),
            endpoint: url.to_string(),
        })
    }
}

/// Blocking reqwest client. Closing drops the connection pool.
#[derive(Debug)]
pub struct BlockingClient {
    inner: Option<reqwest::blocking::Client>,
}

impl BlockingClient {
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        let inner = reqwest::blocking::Client::builder()
            .timeout(config.effective_timeout())
            .build()
            .map_err(net_err)?;
        Ok(Self { inner: Some(inner) })
    }
}

impl HttpClient for BlockingClient {
    fn post(&mut self, request: &PostRequest) -> Result<(), TransportError> {
        let client = self.inner.as_ref().ok_or(TransportError::Closed)?;
        let response = client
            .post(&request.url)
            .header(USER_AGENT, request.user_agent.as_str())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(request.body.clone())
            .send()
            .map_err(net_err)?;
        check_status(response.status(), &request.url)
    }

    fn close(&mut self) -> Result<(), TransportError> {
        self.inner = None;
        Ok(())
    }
}

/// Async reqwest client. Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct AsyncClient {
    inner: Option<reqwest::Client>,
}

impl AsyncClient {
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        let inner = reqwest::Client::builder()
            .timeout(config.effective_timeout())
            .build()
            .map_err(net_err)?;
        Ok(Self { inner: Some(inner) })
    }
}

impl AsyncHttpClient for AsyncClient {
    async fn post(&mut self, request: &PostRequest) -> Result<(), TransportError> {
        let client = self.inner.as_ref().ok_or(TransportError::Closed)?;
        let response = client
            .post(&request.url)
            .header(USER_AGENT, request.user_agent.as_str())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(request.body.clone())
            .send()
            .await
            .map_err(net_err)?;
        check_status(response.status(), &request.url)
    }

    async fn close(&mut self) -> Result<(), TransportError> {
        self.inner = None;
        Ok(())
    }
}
