//! # GitHub REST API Client
//!
//! Client for the two paginated GitHub listing endpoints the collector needs:
//! organization members and per-user GPG keys.
//!
//! The listing operations sit behind the [`KeySource`] trait so the collector
//! can be exercised against an in-memory implementation in tests.

mod client;
mod error;
mod types;

pub use client::GithubClient;
pub use error::GithubError;
pub use types::{GpgKey, OrgMember, Page};

use async_trait::async_trait;

/// Source of organization members and their GPG keys
///
/// Both operations fetch exactly one page; the caller drives the pagination
/// loop off [`Page::next_page`]. Pages are numbered from 1, matching the
/// GitHub API.
#[async_trait]
pub trait KeySource {
    /// List one page of the organization's members
    async fn list_members_page(&self, org: &str, page: u32)
        -> Result<Page<OrgMember>, GithubError>;

    /// List one page of a user's GPG keys
    async fn list_gpg_keys_page(&self, login: &str, page: u32)
        -> Result<Page<GpgKey>, GithubError>;
}
