//! Comment accessors.
//!
//! Comments are always listed under their post; replies to another comment
//! are narrowed with the `parent_id` filter, which renders before the
//! pagination pair.

use crate::error::ApiError;
use crate::http::{check_status, decode_json, HttpMethod, HttpRequest, HttpResponse};
use crate::page::Page;
use crate::social::SocialClient;
use crate::types::{Comment, NewComment};

impl SocialClient {
    pub fn build_post_comments(
        &self,
        post_id: i64,
        parent_id: Option<i64>,
        page: Option<Page>,
    ) -> HttpRequest {
        let mut req = self.request(HttpMethod::Get, &format!("/listed-comment/{post_id}"));
        if let Some(parent_id) = parent_id {
            req = req.with_query("parent_id", parent_id);
        }
        req.with_page(page.unwrap_or(Page::FEED))
    }

    pub fn parse_post_comments(&self, response: HttpResponse) -> Result<Vec<Comment>, ApiError> {
        decode_json(response, 200)
    }

    pub fn build_create_comment(
        &self,
        post_id: i64,
        input: &NewComment,
    ) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Post, &format!("/comment/{post_id}")).with_json(input)
    }

    pub fn parse_create_comment(&self, response: HttpResponse) -> Result<Comment, ApiError> {
        decode_json(response, 201)
    }

    pub fn build_delete_comment(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/comment/{id}"))
    }

    pub fn parse_delete_comment(&self, response: HttpResponse) -> Result<(), ApiError> {
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
    fn replies_listing_filters_before_paging() {
        let req = client().build_post_comments(5, Some(2), None);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.url(),
            "http://localhost:3000/listed-comment/5?parent_id=2&skip=0&limit=20"
        );
    }

    #[test]
    fn top_level_listing_omits_the_parent_filter() {
        let req = client().build_post_comments(5, None, None);
        assert_eq!(req.url(), "http://localhost:3000/listed-comment/5?skip=0&limit=20");
    }

    #[test]
    fn post_identifier_travels_in_the_path_not_the_query() {
        let req = client().build_post_comments(42, None, Some(Page::new(10, 5)));
        assert_eq!(req.path, "http://localhost:3000/listed-comment/42");
        assert!(req.query.iter().all(|(key, _)| key != "post_id"));
    }

    #[test]
    fn build_create_comment_carries_the_reply_target_in_the_body() {
        let input = NewComment {
            content: "looking healthy".to_string(),
            parent_id: Some(2),
        };
        let req = client().build_create_comment(5, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url(), "http://localhost:3000/comment/5");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["content"], "looking healthy");
        assert_eq!(body["parent_id"], 2);
    }

    #[test]
    fn parse_delete_comment_maps_404_to_not_found() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: String::new(),
        };
        let err = client().parse_delete_comment(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }
}
