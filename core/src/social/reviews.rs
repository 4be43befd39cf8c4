//! Review accessors.
//!
//! Listing and creation are scoped by the reviewed genetic; update and delete
//! are keyed by the review's own identifier. Create and update share
//! [`ReviewPayload`] because the backend requires the full body either way.

use crate::error::ApiError;
use crate::http::{check_status, decode_json, HttpMethod, HttpRequest, HttpResponse};
use crate::page::Page;
use crate::social::SocialClient;
use crate::types::{Review, ReviewPayload};

impl SocialClient {
    pub fn build_genetic_reviews(&self, genetic_id: i64, page: Option<Page>) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/listed-review/{genetic_id}"))
            .with_page(page.unwrap_or(Page::FEED))
    }

    pub fn parse_genetic_reviews(&self, response: HttpResponse) -> Result<Vec<Review>, ApiError> {
        decode_json(response, 200)
    }

    pub fn build_create_review(
        &self,
        genetic_id: i64,
        input: &ReviewPayload,
    ) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Post, &format!("/review/{genetic_id}")).with_json(input)
    }

    pub fn parse_create_review(&self, response: HttpResponse) -> Result<Review, ApiError> {
        decode_json(response, 201)
    }

    pub fn build_update_review(
        &self,
        id: i64,
        input: &ReviewPayload,
    ) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Put, &format!("/review/{id}")).with_json(input)
    }

    pub fn parse_update_review(&self, response: HttpResponse) -> Result<Review, ApiError> {
        decode_json(response, 200)
    }

    pub fn build_delete_review(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/review/{id}"))
    }

    pub fn parse_delete_review(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SocialClient {
        SocialClient::new("http://localhost:3000")
    }

    #[test]
    fn listing_is_scoped_by_genetic_and_paged_by_default() {
        let req = client().build_genetic_reviews(3, None);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url(), "http://localhost:3000/listed-review/3?skip=0&limit=20");
    }

    #[test]
    fn create_is_keyed_by_genetic_update_by_review() {
        let payload = ReviewPayload {
            value: 4,
            content: "dense and frosty".to_string(),
        };
        let create = client().build_create_review(3, &payload).unwrap();
        let update = client().build_update_review(11, &payload).unwrap();
        assert_eq!(create.method, HttpMethod::Post);
        assert_eq!(create.url(), "http://localhost:3000/review/3");
        assert_eq!(update.method, HttpMethod::Put);
        assert_eq!(update.url(), "http://localhost:3000/review/11");
    }

    #[test]
    fn update_review_sends_the_full_body() {
        let payload = ReviewPayload {
            value: 5,
            content: "improved after a proper cure".to_string(),
        };
        let req = client().build_update_review(11, &payload).unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["value"], 5);
        assert_eq!(body["content"], "improved after a proper cure");
    }

    #[test]
    fn update_review_round_trips_the_identifier() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{
                "id": 11,
                "genetic_id": 3,
                "author": {"id": 1, "username": "grower_one", "avatar_url": null},
                "value": 5,
                "content": "improved after a proper cure",
                "created_at": "2025-05-01T09:30:00Z"
            }"#
            .to_string(),
        };
        let review = client().parse_update_review(response).unwrap();
        assert_eq!(review.id, 11);
        assert_eq!(review.genetic_id, 3);
    }

    #[test]
    fn parse_delete_review_requires_204() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: String::new(),
        };
        let err = client().parse_delete_review(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 200, .. }));
    }
}
