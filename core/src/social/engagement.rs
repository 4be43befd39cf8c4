//! Like, follow and block accessors.
//!
//! All three are presence/absence resources sharing one protocol: POST sets,
//! GET queries (a 404 means "unset" and surfaces as [`ApiError::NotFound`]),
//! DELETE unsets. There is no toggle endpoint; callers sequence set against
//! unset from a prior read.

use crate::error::ApiError;
use crate::http::{check_status, decode_json, HttpMethod, HttpRequest, HttpResponse};
use crate::page::Page;
use crate::social::SocialClient;
use crate::types::{Block, Follow, Like, UserSummary};

impl SocialClient {
    pub fn build_like_post(&self, post_id: i64) -> HttpRequest {
        self.request(HttpMethod::Post, &format!("/like/{post_id}"))
    }

    pub fn parse_like_post(&self, response: HttpResponse) -> Result<Like, ApiError> {
        decode_json(response, 201)
    }

    pub fn build_like_state(&self, post_id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/like/{post_id}"))
    }

    pub fn parse_like_state(&self, response: HttpResponse) -> Result<Like, ApiError> {
        decode_json(response, 200)
    }

    pub fn build_unlike_post(&self, post_id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/like/{post_id}"))
    }

    pub fn parse_unlike_post(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    pub fn build_follow_user(&self, user_id: i64) -> HttpRequest {
        self.request(HttpMethod::Post, &format!("/follow/{user_id}"))
    }

    pub fn parse_follow_user(&self, response: HttpResponse) -> Result<Follow, ApiError> {
        decode_json(response, 201)
    }

    pub fn build_follow_state(&self, user_id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/follow/{user_id}"))
    }

    pub fn parse_follow_state(&self, response: HttpResponse) -> Result<Follow, ApiError> {
        decode_json(response, 200)
    }

    pub fn build_unfollow_user(&self, user_id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/follow/{user_id}"))
    }

    pub fn parse_unfollow_user(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    pub fn build_followers(&self, user_id: i64, page: Option<Page>) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/follower/{user_id}"))
            .with_page(page.unwrap_or(Page::FEED))
    }

    pub fn parse_followers(&self, response: HttpResponse) -> Result<Vec<UserSummary>, ApiError> {
        decode_json(response, 200)
    }

    pub fn build_following(&self, user_id: i64, page: Option<Page>) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/followed/{user_id}"))
            .with_page(page.unwrap_or(Page::FEED))
    }

    pub fn parse_following(&self, response: HttpResponse) -> Result<Vec<UserSummary>, ApiError> {
        decode_json(response, 200)
    }

    pub fn build_block_user(&self, user_id: i64) -> HttpRequest {
        self.request(HttpMethod::Post, &format!("/block/{user_id}"))
    }

    pub fn parse_block_user(&self, response: HttpResponse) -> Result<Block, ApiError> {
        decode_json(response, 201)
    }

    pub fn build_unblock_user(&self, user_id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/block/{user_id}"))
    }

    pub fn parse_unblock_user(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    pub fn build_blocked_users(&self, page: Option<Page>) -> HttpRequest {
        self.request(HttpMethod::Get, "/block/").with_page(page.unwrap_or(Page::FEED))
    }

    pub fn parse_blocked_users(&self, response: HttpResponse) -> Result<Vec<Block>, ApiError> {
        decode_json(response, 200)
    }
}
