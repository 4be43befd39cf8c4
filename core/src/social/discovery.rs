//! Search and catalog accessors: global search, genetics, phases.
//!
//! All three listings take an optional free-text `query` filter; when absent
//! the pair is omitted entirely rather than sent empty.

use crate::error::ApiError;
use crate::http::{decode_json, HttpMethod, HttpRequest, HttpResponse};
use crate::page::Page;
use crate::social::SocialClient;
use crate::types::{Genetic, Phase, SearchResults};

impl SocialClient {
    pub fn build_global_search(&self, query: Option<&str>, page: Option<Page>) -> HttpRequest {
        let mut req = self.request(HttpMethod::Get, "/global-research/");
        if let Some(query) = query {
            req = req.with_query("query", query);
        }
        req.with_page(page.unwrap_or(Page::FEED))
    }

    pub fn parse_global_search(&self, response: HttpResponse) -> Result<SearchResults, ApiError> {
        decode_json(response, 200)
    }

    pub fn build_genetics(&self, query: Option<&str>, page: Option<Page>) -> HttpRequest {
        let mut req = self.request(HttpMethod::Get, "/genetic/");
        if let Some(query) = query {
            req = req.with_query("query", query);
        }
        req.with_page(page.unwrap_or(Page::FEED))
    }

    pub fn parse_genetics(&self, response: HttpResponse) -> Result<Vec<Genetic>, ApiError> {
        decode_json(response, 200)
    }

    pub fn build_genetic(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/detailed-genetic/{id}"))
    }

    pub fn parse_genetic(&self, response: HttpResponse) -> Result<Genetic, ApiError> {
        decode_json(response, 200)
    }

    pub fn build_phases(&self, query: Option<&str>, page: Option<Page>) -> HttpRequest {
        let mut req = self.request(HttpMethod::Get, "/phase/");
        if let Some(query) = query {
            req = req.with_query("query", query);
        }
        req.with_page(page.unwrap_or(Page::FEED))
    }

    pub fn parse_phases(&self, response: HttpResponse) -> Result<Vec<Phase>, ApiError> {
        decode_json(response, 200)
    }
}
