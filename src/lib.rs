//! # ArgoCD GPG Key Sync
//!
//! A batch job that keeps ArgoCD's trusted GPG signature keys in sync with the
//! members of a GitHub organization.
//!
//! ## Overview
//!
//! Each run is a strictly sequential two-step pipeline:
//!
//! 1. **Collect** - Walks the organization's member list and every member's GPG
//!    key list through the paginated GitHub REST API, accumulating a
//!    deduplicated key ID to armored key block mapping. GitHub's `web-flow`
//!    commit signing key is seeded into the mapping by default.
//! 2. **Publish** - Replaces `/spec/signatureKeys` on the configured ArgoCD
//!    `AppProject` and `/data` on the GPG key ConfigMap with JSON Patch
//!    requests against the cluster.
//!
//! The job is fail-fast by design: any GitHub or Kubernetes API failure aborts
//! the run with a non-zero exit code. Every publish is a full replace, so the
//! outer scheduler (a CronJob, typically) can simply re-run the whole job.
//!
//! ## Usage
//!
//! See the [README.md](../README.md) for configuration and deployment examples.

pub mod collector;
pub mod config;
pub mod constants;
pub mod github;
pub mod publisher;
