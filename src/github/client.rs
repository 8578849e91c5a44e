//! # GitHub Client Creation and Requests
//!
//! Thin reqwest wrapper around the two listing endpoints, with bearer-token
//! auth and `Link`-header pagination.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, LINK};
use serde::de::DeserializeOwned;

use crate::constants;

use super::{GithubError, GpgKey, KeySource, OrgMember, Page};

/// GitHub REST API client
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
    page_size: u32,
}

impl GithubClient {
    /// Create a client authenticated with a bearer token
    ///
    /// `base_url` is `https://api.github.com` in production and the API root
    /// of the GitHub Enterprise host otherwise.
    pub fn new(base_url: &str, token: &str, page_size: u32) -> Result<Self, GithubError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );

        let http = reqwest::Client::builder()
            .user_agent(constants::USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size,
        })
    }

    /// Fetch one page of a listing endpoint
    async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        page: u32,
    ) -> Result<Page<T>, GithubError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("per_page", self.page_size), ("page", page)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let url = response.url().to_string();
            let body = response.text().await.unwrap_or_default();
            return Err(GithubError::Status { status, url, body });
        }

        let next_page = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_next_page);
        let items = response.json().await?;

        Ok(Page { items, next_page })
    }
}

#[async_trait]
impl KeySource for GithubClient {
    async fn list_members_page(
        &self,
        org: &str,
        page: u32,
    ) -> Result<Page<OrgMember>, GithubError> {
        self.get_page(&format!("/orgs/{org}/members"), page).await
    }

    async fn list_gpg_keys_page(
        &self,
        login: &str,
        page: u32,
    ) -> Result<Page<GpgKey>, GithubError> {
        self.get_page(&format!("/users/{login}/gpg_keys"), page)
            .await
    }
}

/// Extract the next page number from a `Link` response header
///
/// GitHub paginates with `Link: <url>; rel="next", <url>; rel="last"`. The
/// terminal page carries no `rel="next"` entry, which ends the loop.
fn parse_next_page(link: &str) -> Option<u32> {
    link.split(',').find_map(|entry| {
        let (target, params) = entry.split_once(';')?;
        if !params.contains(r#"rel="next""#) {
            return None;
        }
        let url = target.trim().strip_prefix('<')?.strip_suffix('>')?;
        let (_, query) = url.split_once('?')?;
        query
            .split('&')
            .find_map(|param| param.strip_prefix("page="))
            .and_then(|page| page.parse().ok())
    })
}
