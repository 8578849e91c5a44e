//! # Job Configuration
//!
//! Sync job configuration loaded from environment variables (populated from a
//! ConfigMap and Secret using `envFrom` in the CronJob spec).
//!
//! The two GitHub settings are required; everything else has a sensible
//! default and can be overridden via environment variables.

use thiserror::Error;

use crate::constants;

/// Raised when a required environment variable is absent or empty
///
/// Detected eagerly at startup, before any client is built or any network
/// call is attempted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Sync job configuration
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// GitHub bearer token (needs `read:org` scope)
    pub github_token: String,
    /// GitHub organization whose members' keys are collected
    pub organization: String,
    /// Base URL of the GitHub REST API
    pub github_api_url: String,
    /// Page size for the member and key listing calls
    pub page_size: u32,
    /// Whether to seed GitHub's `web-flow` commit signing key into the mapping
    pub seed_web_flow_key: bool,
    /// Namespace the ArgoCD resources live in
    pub argocd_namespace: String,
    /// Name of the GPG key ConfigMap
    pub configmap_name: String,
    /// Name of the AppProject carrying the signature key list
    pub project_name: String,
}

impl SyncConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an explicit variable lookup
    ///
    /// Tests drive this with an in-memory map instead of mutating the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            github_token: required_var(&lookup, "GITHUB_TOKEN")?,
            organization: required_var(&lookup, "GITHUB_ORGANIZATION")?,
            github_api_url: var_or_default(&lookup, "GITHUB_API_URL", constants::DEFAULT_GITHUB_API_URL.to_string()),
            page_size: parsed_var_or_default(&lookup, "GITHUB_PAGE_SIZE", constants::DEFAULT_PAGE_SIZE),
            seed_web_flow_key: parsed_var_or_default(&lookup, "SEED_WEB_FLOW_KEY", true),
            argocd_namespace: var_or_default(&lookup, "ARGOCD_NAMESPACE", constants::DEFAULT_ARGOCD_NAMESPACE.to_string()),
            configmap_name: var_or_default(&lookup, "ARGOCD_CONFIGMAP_NAME", constants::DEFAULT_CONFIGMAP_NAME.to_string()),
            project_name: var_or_default(&lookup, "ARGOCD_PROJECT_NAME", constants::DEFAULT_PROJECT_NAME.to_string()),
        })
    }
}

/// Read a required variable; empty values count as missing
fn required_var(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<String, ConfigError> {
    match lookup(key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(key)),
    }
}

/// Read a variable or return the default value
fn var_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: String) -> String {
    lookup(key).filter(|v| !v.is_empty()).unwrap_or(default)
}

/// Read and parse a variable or return the default value
fn parsed_var_or_default<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    lookup(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}
