//! # ArgoCD GPG Key Sync
//!
//! One-shot batch job: collect the GPG keys of every member of a GitHub
//! organization, then replace ArgoCD's trusted signature key list and key
//! material ConfigMap with the result. Designed to run as a Kubernetes
//! CronJob with the ambient in-cluster identity.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use argocd_gpg_sync::collector::collect_gpg_keys;
use argocd_gpg_sync::config::SyncConfig;
use argocd_gpg_sync::constants;
use argocd_gpg_sync::github::{GithubClient, GithubError};
use argocd_gpg_sync::publisher::{patch, publish, PublishTarget};

/// Sync GitHub organization GPG keys into ArgoCD
#[derive(Debug, Parser)]
#[command(name = "argocd-gpg-sync", version, about)]
struct Cli {
    /// Collect keys and print both patch payloads without touching the cluster
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    // Configure rustls crypto provider FIRST, before any other operations
    // Required for rustls 0.23+ when no default provider is set via features
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "argocd_gpg_sync=info".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        if is_auth_failure(&e) {
            error!(
                "GitHub rejected the credential; verify GITHUB_TOKEN is valid and \
                 carries the read:org scope for the configured organization"
            );
        }
        error!("Sync failed: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Fail on missing configuration before any client is built
    let config = SyncConfig::from_env()?;

    let github = GithubClient::new(&config.github_api_url, &config.github_token, config.page_size)
        .context("failed to create GitHub client")?;

    let seeds: Vec<(&str, &str)> = if config.seed_web_flow_key {
        vec![(constants::WEB_FLOW_KEY_ID, constants::WEB_FLOW_PUBLIC_KEY)]
    } else {
        vec![]
    };

    let keys = collect_gpg_keys(&github, &config.organization, &seeds).await?;
    info!(
        "Collected {} distinct GPG keys for organization {}",
        keys.len(),
        config.organization
    );

    if cli.dry_run {
        println!(
            "{}",
            serde_json::to_string_pretty(&patch::signature_keys_patch(&keys))?
        );
        println!(
            "{}",
            serde_json::to_string_pretty(&patch::config_data_patch(&keys))?
        );
        info!("Dry run: no cluster resources were modified");
        return Ok(());
    }

    let client = kube::Client::try_default()
        .await
        .context("failed to create Kubernetes client; ensure in-cluster config or a kubeconfig is available")?;

    let target = PublishTarget {
        namespace: config.argocd_namespace,
        configmap_name: config.configmap_name,
        project_name: config.project_name,
    };
    publish(client, &target, &keys).await
}

/// Whether any error in the chain is a rejected GitHub credential
fn is_auth_failure(error: &anyhow::Error) -> bool {
    error
        .chain()
        .filter_map(|cause| cause.downcast_ref::<GithubError>())
        .any(GithubError::is_auth_failure)
}
