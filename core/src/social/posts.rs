//! Post, reel and grow-post accessors.
//!
//! # Design
//! The backend exposes two listings per timeline resource — a global feed
//! and a per-user history — returning the same shape. They are unified
//! behind [`FeedScope`] so the pair cannot drift apart: the scope picks both
//! the path variant and the default pagination profile. Feeds window by
//! `(0, 20)`, a user's own history by `(0, 100)`. Grow posts are user-scoped
//! only and keep their historical `(0, 20)` default.

use crate::error::ApiError;
use crate::http::{check_status, decode_json, HttpMethod, HttpRequest, HttpResponse};
use crate::page::Page;
use crate::social::SocialClient;
use crate::types::{GrowPost, NewGrowPost, NewPost, NewReel, Post, PostUpdate, Reel};

/// Which listing variant of a timeline resource to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedScope {
    /// The global feed.
    Global,
    /// One user's own history.
    User(i64),
}

impl SocialClient {
    pub fn build_posts(&self, scope: FeedScope, page: Option<Page>) -> HttpRequest {
        let (endpoint, default_page) = match scope {
            FeedScope::Global => ("/feed-social-post/".to_string(), Page::FEED),
            FeedScope::User(user_id) => (format!("/user-social-post/{user_id}"), Page::OWN),
        };
        self.request(HttpMethod::Get, &endpoint).with_page(page.unwrap_or(default_page))
    }

    pub fn parse_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        decode_json(response, 200)
    }

    pub fn build_post(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/detailed-social-post/{id}"))
    }

    pub fn parse_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        decode_json(response, 200)
    }

    pub fn build_create_post(&self, input: &NewPost) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Post, "/social-post/").with_json(input)
    }

    pub fn parse_create_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        decode_json(response, 201)
    }

    pub fn build_update_post(&self, id: i64, input: &PostUpdate) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Put, &format!("/social-post/{id}")).with_json(input)
    }

    pub fn parse_update_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        decode_json(response, 200)
    }

    pub fn build_delete_post(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/social-post/{id}"))
    }

    pub fn parse_delete_post(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    pub fn build_reels(&self, scope: FeedScope, page: Option<Page>) -> HttpRequest {
        let (endpoint, default_page) = match scope {
            FeedScope::Global => ("/feed-reel/".to_string(), Page::FEED),
            FeedScope::User(user_id) => (format!("/user-reel/{user_id}"), Page::OWN),
        };
        self.request(HttpMethod::Get, &endpoint).with_page(page.unwrap_or(default_page))
    }

    pub fn parse_reels(&self, response: HttpResponse) -> Result<Vec<Reel>, ApiError> {
        decode_json(response, 200)
    }

    pub fn build_reel(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/detailed-reel/{id}"))
    }

    pub fn parse_reel(&self, response: HttpResponse) -> Result<Reel, ApiError> {
        decode_json(response, 200)
    }

    pub fn build_create_reel(&self, input: &NewReel) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Post, "/reel/").with_json(input)
    }

    pub fn parse_create_reel(&self, response: HttpResponse) -> Result<Reel, ApiError> {
        decode_json(response, 201)
    }

    pub fn build_delete_reel(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/reel/{id}"))
    }

    pub fn parse_delete_reel(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    /// Grow posts have no global feed; the listing is always scoped to a
    /// user and keeps the feed-sized default window.
    pub fn build_grow_posts(&self, user_id: i64, page: Option<Page>) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/user-grow-post/{user_id}"))
            .with_page(page.unwrap_or(Page::FEED))
    }

    pub fn parse_grow_posts(&self, response: HttpResponse) -> Result<Vec<GrowPost>, ApiError> {
        decode_json(response, 200)
    }

    pub fn build_grow_post(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/detailed-grow-post/{id}"))
    }

    pub fn parse_grow_post(&self, response: HttpResponse) -> Result<GrowPost, ApiError> {
        decode_json(response, 200)
    }

    pub fn build_create_grow_post(&self, input: &NewGrowPost) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Post, "/grow-post/").with_json(input)
    }

    pub fn parse_create_grow_post(&self, response: HttpResponse) -> Result<GrowPost, ApiError> {
        decode_json(response, 201)
    }

    pub fn build_delete_grow_post(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/grow-post/{id}"))
    }

    pub fn parse_delete_grow_post(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }
}
