//! # Response Types
//!
//! GitHub REST API response structures, reduced to the fields the sync job
//! reads. Everything else in the API responses is ignored during
//! deserialization.

use serde::Deserialize;

/// One page of a paginated listing
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// The records on this page
    pub items: Vec<T>,
    /// Page number of the next page, or `None` on the terminal page
    ///
    /// Parsed from the `Link: <...>; rel="next"` response header.
    pub next_page: Option<u32>,
}

/// An organization member, from `GET /orgs/{org}/members`
#[derive(Debug, Clone, Deserialize)]
pub struct OrgMember {
    /// Account login, usable as the `{username}` of the GPG key listing call
    pub login: String,
}

/// A GPG key record, from `GET /users/{username}/gpg_keys`
///
/// Both fields are optional in the API: subkeys carry no raw block of their
/// own, and keys uploaded without a verified email can come back without an
/// ID. The collector skips records missing either field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GpgKey {
    /// Short GPG key ID (e.g. `4AEE18F83AFDEB23`)
    pub key_id: Option<String>,
    /// ASCII-armored public key block
    pub raw_key: Option<String>,
}
