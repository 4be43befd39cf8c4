//! Accessors for the authentication/legal service.
//!
//! `AuthClient` is the smaller of the two clients: session management plus
//! the legal documents the onboarding screens display. A successful
//! [`parse_login`](AuthClient::parse_login) or
//! [`parse_register`](AuthClient::parse_register) yields the bearer token
//! the social client is constructed with.

use crate::error::ApiError;
use crate::http::{check_status, decode_json, HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::{Credentials, LegalDocument, PasswordResetRequest, Registration, Session};

/// Which legal document to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalSlug {
    TermsOfService,
    PrivacyPolicy,
}

impl LegalSlug {
    pub fn as_str(self) -> &'static str {
        match self {
            LegalSlug::TermsOfService => "terms-of-service",
            LegalSlug::PrivacyPolicy => "privacy-policy",
        }
    }
}

/// Stateless client for the authentication/legal service.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network; the caller executes the round-trip in between.
#[derive(Debug, Clone)]
pub struct AuthClient {
    transport: Transport,
}

impl AuthClient {
    /// Anonymous client: login, registration, password reset, legal texts.
    pub fn new(base_url: &str) -> Self {
        Self {
            transport: Transport::new(base_url, None),
        }
    }

    /// Authenticated client; required for logout.
    pub fn with_token(base_url: &str, token: &str) -> Self {
        Self {
            transport: Transport::new(base_url, Some(token)),
        }
    }

    pub fn build_login(&self, credentials: &Credentials) -> Result<HttpRequest, ApiError> {
        self.transport.request(HttpMethod::Post, "/login").with_json(credentials)
    }

    pub fn parse_login(&self, response: HttpResponse) -> Result<Session, ApiError> {
        decode_json(response, 200)
    }

    pub fn build_register(&self, registration: &Registration) -> Result<HttpRequest, ApiError> {
        self.transport.request(HttpMethod::Post, "/register").with_json(registration)
    }

    pub fn parse_register(&self, response: HttpResponse) -> Result<Session, ApiError> {
        decode_json(response, 201)
    }

    pub fn build_password_reset(
        &self,
        request: &PasswordResetRequest,
    ) -> Result<HttpRequest, ApiError> {
        self.transport.request(HttpMethod::Post, "/password-reset").with_json(request)
    }

    pub fn parse_password_reset(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    pub fn build_logout(&self) -> HttpRequest {
        self.transport.request(HttpMethod::Post, "/logout")
    }

    pub fn parse_logout(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    pub fn build_legal_document(&self, slug: LegalSlug) -> HttpRequest {
        self.transport.request(HttpMethod::Get, &format!("/legal/{}", slug.as_str()))
    }

    pub fn parse_legal_document(&self, response: HttpResponse) -> Result<LegalDocument, ApiError> {
        decode_json(response, 200)
    }
}
