//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! `DogApiClient` builds `HttpRequest` values and parses `HttpResponse` values
//! as plain data. Executing the request is the job of a `Transport`, so the
//! parsing half can be tested against canned responses without a network.

/// HTTP method for a request. The dog API only needs `GET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// The body is always fully read before the value is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
