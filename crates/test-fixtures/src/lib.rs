//! HTTP test doubles and payload helpers shared by the beacon test suites.
//!
//! The recording clients keep every `PostRequest` in a shared log, so a
//! test can keep a [`RequestLog`] handle after the client has been moved
//! into (and dropped with) a transport.

use std::sync::{Arc, Mutex, MutexGuard};

use beacon_core::errors::TransportError;
use beacon_core::traits::{AsyncHttpClient, HttpClient, PostRequest};

#[derive(Debug, Default)]
struct LogState {
    requests: Vec<PostRequest>,
    close_calls: usize,
    failures_remaining: usize,
}

/// Shared view of what a recording client has seen.
#[derive(Debug, Clone, Default)]
pub struct RequestLog {
    state: Arc<Mutex<LogState>>,
}

impl RequestLog {
    fn lock(&self) -> MutexGuard<'_, LogState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Every POST attempted so far, failed ones included.
    pub fn requests(&self) -> Vec<PostRequest> {
        self.lock().requests.clone()
    }

    pub fn post_count(&self) -> usize {
        self.lock().requests.len()
    }

    /// Number of hits in each POST body, in order.
    pub fn batch_sizes(&self) -> Vec<usize> {
        self.lock()
            .requests
            .iter()
            .map(|r| r.body.split('\n').count())
            .collect()
    }

    pub fn last(&self) -> Option<PostRequest> {
        self.lock().requests.last().cloned()
    }

    pub fn close_calls(&self) -> usize {
        self.lock().close_calls
    }

    /// Make the next `n` POSTs fail with a network error.
    pub fn fail_next(&self, n: usize) {
        self.lock().failures_remaining = n;
    }

    fn record_post(&self, request: &PostRequest) -> Result<(), TransportError> {
        let mut state = self.lock();
        state.requests.push(request.clone());
        if state.failures_remaining > 0 {
            state.failures_remaining -= 1;
            return Err(TransportError::Network {
                reason: "connection reset".to_string(),
            });
        }
        Ok(())
    }

    fn record_close(&self) {
        self.lock().close_calls += 1;
    }
}

/// Blocking client that records instead of sending.
#[derive(Debug, Clone, Default)]
pub struct RecordingClient {
    log: RequestLog,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> RequestLog {
        self.log.clone()
    }
}

impl HttpClient for RecordingClient {
    fn post(&mut self, request: &PostRequest) -> Result<(), TransportError> {
        self.log.record_post(request)
    }

    fn close(&mut self) -> Result<(), TransportError> {
        self.log.record_close();
        Ok(())
    }
}

/// Async client that records instead of sending.
#[derive(Debug, Clone, Default)]
pub struct AsyncRecordingClient {
    log: RequestLog,
}

impl AsyncRecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> RequestLog {
        self.log.clone()
    }
}

impl AsyncHttpClient for AsyncRecordingClient {
    async fn post(&mut self, request: &PostRequest) -> Result<(), TransportError> {
        self.log.record_post(request)
    }

    async fn close(&mut self) -> Result<(), TransportError> {
        self.log.record_close();
        Ok(())
    }
}

/// Parse one encoded hit back into `(key, value)` pairs, in wire order.
pub fn decode_hit(line: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(line.as_bytes()).into_owned().collect()
}

/// Look up one key in an encoded hit.
pub fn hit_param(line: &str, key: &str) -> Option<String> {
    decode_hit(line)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

/// Decode every hit of the most recent POST.
pub fn last_hits(log: &RequestLog) -> Vec<Vec<(String, String)>> {
    log.last()
        .map(|request| request.body.split('\n').map(decode_hit).collect())
        .unwrap_or_default()
}
