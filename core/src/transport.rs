//! Executing `HttpRequest`s against the network.
//!
//! # Design
//! `Transport` is the seam between the sans-IO client and real I/O. The
//! production implementation wraps a single `ureq::Agent`, created once and
//! shared by every call. Tests substitute their own implementations.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Failure to complete an HTTP round-trip.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),
}

/// Performs a blocking HTTP round-trip.
///
/// Implementations must be safe to call from several threads at once and
/// must return non-2xx responses as data rather than as errors.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

/// `Transport` backed by a default-configured `ureq::Agent`.
///
/// The only deviation from ureq's defaults is that 4xx/5xx responses are
/// returned as data, so the envelope in an error body can still be read.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!(url = %request.path, "Making GET request");

        let mut response = match request.method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(&request.path);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()?
            }
        };

        let status = response.status().as_u16();
        // Reading to the end hands the connection back to the agent; on error
        // the response is dropped and the connection closed.
        let body = response.body_mut().read_to_string()?;

        debug!(status, bytes = body.len(), "Received response");
        Ok(HttpResponse { status, body })
    }
}
