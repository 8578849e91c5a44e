//! # Key Collector
//!
//! Walks the organization's member list and every member's GPG key list,
//! accumulating a deduplicated key ID to armored key block mapping.
//!
//! The mapping is handed to the publisher as an immutable snapshot; nothing
//! mutates it after collection finishes. A `BTreeMap` keeps the serialized
//! patch payloads deterministic across runs, but no logic may depend on the
//! iteration order.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::github::{GithubError, KeySource};

/// Collect the GPG keys of every member of `organization`
///
/// `seeds` are inserted before collection, so a collected key with the same
/// ID overwrites a seed (last writer wins, in listing order). A key record
/// missing its ID or its raw block is skipped without error.
///
/// Any listing failure aborts collection immediately; no partial mapping is
/// returned. Re-running the whole job is the recovery path.
pub async fn collect_gpg_keys(
    source: &dyn KeySource,
    organization: &str,
    seeds: &[(&str, &str)],
) -> Result<BTreeMap<String, String>, GithubError> {
    let mut keys: BTreeMap<String, String> = seeds
        .iter()
        .map(|(id, material)| ((*id).to_string(), (*material).to_string()))
        .collect();

    info!("Collecting GPG keys from organization {organization}");

    let mut member_page = 1;
    loop {
        let members = source.list_members_page(organization, member_page).await?;

        for member in &members.items {
            let mut key_page = 1;
            loop {
                let page = source.list_gpg_keys_page(&member.login, key_page).await?;
                for key in page.items {
                    if let (Some(id), Some(material)) = (key.key_id, key.raw_key) {
                        if id.is_empty() || material.is_empty() {
                            continue;
                        }
                        keys.insert(id, material);
                    } else {
                        debug!("Skipping incomplete GPG key record for {}", member.login);
                    }
                }
                match page.next_page {
                    Some(next) => key_page = next,
                    None => break,
                }
            }
        }

        info!(
            "{} keys collected after member page {member_page}",
            keys.len()
        );

        match members.next_page {
            Some(next) => member_page = next,
            None => break,
        }
    }

    Ok(keys)
}
