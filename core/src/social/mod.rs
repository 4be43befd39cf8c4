//! Accessors for the social/content service.
//!
//! # Design
//! One `build_*` / `parse_*` pair per (resource, operation), spread over one
//! file per resource family. Every builder goes through the shared
//! [`Transport`] so path construction, query encoding and header stamping
//! stay uniform; every parser goes through the shared status/decode helpers
//! so error mapping stays uniform. The client holds no state beyond its
//! transport configuration and is safe to clone and use concurrently.

mod account;
mod comments;
mod discovery;
mod engagement;
mod posts;
mod reviews;

pub use posts::FeedScope;

use crate::http::{HttpMethod, HttpRequest, Transport};

/// Stateless client for the social/content service.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network; the caller executes the round-trip in between.
/// Most endpoints require a bearer token (use [`with_token`]); the feed,
/// detail and discovery endpoints also work anonymously.
///
/// [`with_token`]: SocialClient::with_token
#[derive(Debug, Clone)]
pub struct SocialClient {
    transport: Transport,
}

impl SocialClient {
    /// Anonymous client.
    pub fn new(base_url: &str) -> Self {
        Self {
            transport: Transport::new(base_url, None),
        }
    }

    /// Authenticated client; the token is stamped onto every request.
    pub fn with_token(base_url: &str, token: &str) -> Self {
        Self {
            transport: Transport::new(base_url, Some(token)),
        }
    }

    pub(crate) fn request(&self, method: HttpMethod, endpoint: &str) -> HttpRequest {
        self.transport.request(method, endpoint)
    }
}
