//! HTTP requests and responses as plain data.
//!
//! # Design
//! [`TodoApi`](crate::TodoApi) builds `HttpRequest` values and parses
//! `HttpResponse` values without ever touching the network; the round-trip in
//! between belongs to [`transport::execute`](crate::transport::execute) (or to
//! a test that fabricates the response directly). Keeping the I/O boundary
//! explicit makes every build/parse pair deterministic and testable offline.

/// HTTP method for a request. Only the methods the todo API actually uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `TodoApi::build_*` methods; `url` is absolute (base URL already
/// applied).
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by the transport (or a test) and consumed by `TodoApi::parse_*`
/// methods.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
