//! HTTP wire types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — the caller (host) is responsible for executing
//! the actual I/O. This separation keeps the core deterministic and easy to
//! test.
//!
//! Every accessor in the crate goes through the same builder chain:
//! [`Transport::request`] stamps the base URL and bearer header, and the
//! `with_query` / `with_page` / `with_json` combinators attach structured
//! query pairs and JSON bodies. No accessor hand-builds a query string, so
//! path interpolation and query encoding cannot drift between resources.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::page::Page;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by the `build_*` accessor methods. `path` is the absolute URL
/// without its query string; `query` holds the structured pairs in the order
/// they will be rendered. The caller executes the request (use [`url`] for
/// the full target) and feeds the corresponding `HttpResponse` back into the
/// matching `parse_*` method.
///
/// [`url`]: HttpRequest::url
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Render the full request target: path plus percent-encoded query
    /// string, pairs in insertion order.
    pub fn url(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let pairs: Vec<String> = self
            .query
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect();
        format!("{}?{}", self.path, pairs.join("&"))
    }

    /// Append one structured query pair. Values are kept raw here and
    /// percent-encoded at render time.
    pub(crate) fn with_query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Append the pagination window. Always rendered after any filter pairs,
    /// `skip` before `limit`.
    pub(crate) fn with_page(self, page: Page) -> Self {
        self.with_query("skip", page.skip).with_query("limit", page.limit)
    }

    /// Attach a JSON body and its `content-type` header.
    pub(crate) fn with_json<T: Serialize>(mut self, payload: &T) -> Result<Self, ApiError> {
        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        self.headers.push(("content-type".to_string(), "application/json".to_string()));
        self.body = Some(body);
        Ok(self)
    }
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to the matching `parse_*` method for status checking and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// A configured request factory: base URL plus optional bearer token.
///
/// One `Transport` backs each of the two clients (auth and social). It owns
/// nothing transport-level beyond these two values — timeouts, TLS and
/// connection reuse belong to the executing host.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    base_url: String,
    token: Option<String>,
}

impl Transport {
    pub(crate) fn new(base_url: &str, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(str::to_string),
        }
    }

    /// The single request builder every accessor goes through. `endpoint`
    /// must start with `/` and carries any path-scoped identifiers already
    /// interpolated; filters and pagination are attached afterwards via the
    /// `with_*` combinators.
    pub(crate) fn request(&self, method: HttpMethod, endpoint: &str) -> HttpRequest {
        tracing::debug!(?method, endpoint, "building api request");
        let mut headers = Vec::new();
        if let Some(token) = &self.token {
            headers.push(("authorization".to_string(), format!("Bearer {token}")));
        }
        HttpRequest {
            method,
            path: format!("{}{endpoint}", self.base_url),
            query: Vec::new(),
            headers,
            body: None,
        }
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
pub(crate) fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Check the expected status, then decode the JSON body into `T`.
pub(crate) fn decode_json<T: DeserializeOwned>(
    response: HttpResponse,
    expected: u16,
) -> Result<T, ApiError> {
    check_status(&response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}
