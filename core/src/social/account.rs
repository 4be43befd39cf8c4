//! Profile, user and notification accessors.
//!
//! The caller's own profile lives at a fixed path, with the bearer token
//! naming the subject; [`ProfileUpdate`] is all-optional and omitted fields
//! are left unchanged. Marking notifications seen is a bodyless PUT on the
//! collection answered with 204, since the inbox is only ever cleared as a
//! whole.

use crate::error::ApiError;
use crate::http::{check_status, decode_json, HttpMethod, HttpRequest, HttpResponse};
use crate::page::Page;
use crate::social::SocialClient;
use crate::types::{Notification, Profile, ProfileUpdate, UserProfile};

impl SocialClient {
    pub fn build_profile(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/profile/")
    }

    pub fn parse_profile(&self, response: HttpResponse) -> Result<Profile, ApiError> {
        decode_json(response, 200)
    }

    pub fn build_update_profile(&self, input: &ProfileUpdate) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Put, "/profile/").with_json(input)
    }

    pub fn parse_update_profile(&self, response: HttpResponse) -> Result<Profile, ApiError> {
        decode_json(response, 200)
    }

    pub fn build_user(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/user/{id}"))
    }

    pub fn parse_user(&self, response: HttpResponse) -> Result<UserProfile, ApiError> {
        decode_json(response, 200)
    }

    pub fn build_notifications(&self, page: Option<Page>) -> HttpRequest {
        self.request(HttpMethod::Get, "/notification/").with_page(page.unwrap_or(Page::FEED))
    }

    pub fn parse_notifications(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<Notification>, ApiError> {
        decode_json(response, 200)
    }

    /// Marks the whole inbox seen; there is no per-notification variant.
    pub fn build_mark_notifications_seen(&self) -> HttpRequest {
        self.request(HttpMethod::Put, "/notification/")
    }

    pub fn parse_mark_notifications_seen(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }
}
