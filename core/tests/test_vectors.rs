//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use growly_core::{
    ApiError, Comment, FeedScope, HttpMethod, HttpResponse, Page, Post, Review, ReviewPayload,
    SearchResults, SocialClient,
};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> SocialClient {
    SocialClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

/// `null` means "use the accessor's documented default".
fn parse_page(value: &serde_json::Value) -> Option<Page> {
    if value.is_null() {
        return None;
    }
    Some(Page::new(
        value["skip"].as_u64().unwrap() as u32,
        value["limit"].as_u64().unwrap() as u32,
    ))
}

fn simulated_response(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn assert_expected_error(name: &str, expected: &str, err: ApiError) {
    match expected {
        "NotFound" => assert!(matches!(err, ApiError::NotFound), "{name}: expected NotFound"),
        "HttpError" => {
            assert!(matches!(err, ApiError::HttpError { .. }), "{name}: expected HttpError")
        }
        other => panic!("{name}: unknown expected_error: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Feed and user-scoped post listings
// ---------------------------------------------------------------------------

#[test]
fn feed_test_vectors() {
    let raw = include_str!("../../test-vectors/feed.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let scope = match case["scope"].as_str() {
            Some("global") => FeedScope::Global,
            _ => FeedScope::User(case["scope"].as_i64().unwrap()),
        };
        let page = parse_page(&case["page"]);
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_posts(scope, page);
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.url(), format!("{BASE_URL}{}", expected_req["url"].as_str().unwrap()), "{name}: url");
        assert!(req.body.is_none(), "{name}: body should be None");

        // Verify parse
        let result = c.parse_posts(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_expected_error(name, expected_error.as_str().unwrap(), result.unwrap_err());
        } else {
            let posts = result.unwrap();
            let expected: Vec<Post> = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(posts, expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Nested comment listings
// ---------------------------------------------------------------------------

#[test]
fn comment_test_vectors() {
    let raw = include_str!("../../test-vectors/comments.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let post_id = case["post_id"].as_i64().unwrap();
        let parent_id = case["parent_id"].as_i64();
        let page = parse_page(&case["page"]);
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_post_comments(post_id, parent_id, page);
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.url(), format!("{BASE_URL}{}", expected_req["url"].as_str().unwrap()), "{name}: url");

        // Verify parse
        let comments = c.parse_post_comments(simulated_response(case)).unwrap();
        let expected: Vec<Comment> = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(comments, expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Global search
// ---------------------------------------------------------------------------

#[test]
fn search_test_vectors() {
    let raw = include_str!("../../test-vectors/search.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let query = case["query"].as_str();
        let page = parse_page(&case["page"]);
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_global_search(query, page);
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.url(), format!("{BASE_URL}{}", expected_req["url"].as_str().unwrap()), "{name}: url");

        // Verify parse
        let results = c.parse_global_search(simulated_response(case)).unwrap();
        let expected: SearchResults = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(results, expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Toggle resources: like, follow, block
// ---------------------------------------------------------------------------

#[test]
fn toggle_test_vectors() {
    let raw = include_str!("../../test-vectors/toggles.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let resource = case["resource"].as_str().unwrap();
        let operation = case["operation"].as_str().unwrap();
        let target_id = case["target_id"].as_i64().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = match (resource, operation) {
            ("like", "set") => c.build_like_post(target_id),
            ("like", "query") => c.build_like_state(target_id),
            ("like", "unset") => c.build_unlike_post(target_id),
            ("follow", "set") => c.build_follow_user(target_id),
            ("follow", "query") => c.build_follow_state(target_id),
            ("follow", "unset") => c.build_unfollow_user(target_id),
            ("block", "set") => c.build_block_user(target_id),
            ("block", "unset") => c.build_unblock_user(target_id),
            other => panic!("{name}: unknown toggle case: {other:?}"),
        };
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.url(), format!("{BASE_URL}{}", expected_req["url"].as_str().unwrap()), "{name}: url");
        assert!(req.body.is_none(), "{name}: body should be None");
        assert!(req.query.is_empty(), "{name}: query should be empty");

        // Verify parse
        let response = simulated_response(case);
        let result: Result<(), ApiError> = match (resource, operation) {
            ("like", "set") => c.parse_like_post(response).map(|_| ()),
            ("like", "query") => c.parse_like_state(response).map(|_| ()),
            ("like", "unset") => c.parse_unlike_post(response),
            ("follow", "set") => c.parse_follow_user(response).map(|_| ()),
            ("follow", "query") => c.parse_follow_state(response).map(|_| ()),
            ("follow", "unset") => c.parse_unfollow_user(response),
            ("block", "set") => c.parse_block_user(response).map(|_| ()),
            ("block", "unset") => c.parse_unblock_user(response),
            other => panic!("{name}: unknown toggle case: {other:?}"),
        };
        if let Some(expected_error) = case.get("expected_error") {
            assert_expected_error(name, expected_error.as_str().unwrap(), result.unwrap_err());
        } else {
            assert!(result.is_ok(), "{name}: expected success");
        }
    }
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

#[test]
fn review_test_vectors() {
    let raw = include_str!("../../test-vectors/reviews.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let operation = case["operation"].as_str().unwrap();
        let id = case["id"].as_i64().unwrap();
        let input: ReviewPayload = serde_json::from_value(case["input"].clone()).unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = match operation {
            "create" => c.build_create_review(id, &input).unwrap(),
            "update" => c.build_update_review(id, &input).unwrap(),
            other => panic!("{name}: unknown operation: {other}"),
        };
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.url(), format!("{BASE_URL}{}", expected_req["url"].as_str().unwrap()), "{name}: url");

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        let req_body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(req_body, expected_req["body"], "{name}: body");

        // Verify parse
        let response = simulated_response(case);
        let result = match operation {
            "create" => c.parse_create_review(response),
            "update" => c.parse_update_review(response),
            other => panic!("{name}: unknown operation: {other}"),
        };
        if let Some(expected_error) = case.get("expected_error") {
            assert_expected_error(name, expected_error.as_str().unwrap(), result.unwrap_err());
        } else {
            let review = result.unwrap();
            let expected: Review = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(review, expected, "{name}: parsed result");
        }
    }
}
