//! # Trust Publisher
//!
//! Applies the collected key mapping to the cluster: one JSON Patch against
//! the ArgoCD AppProject's signature key list, one against the GPG key
//! ConfigMap's data field. Only the targeted field paths are touched.
//!
//! The two patches are issued sequentially and independently. There is no
//! rollback: if the second patch fails after the first succeeded, the log
//! shows which resource was updated and the run aborts, leaving the outer
//! scheduler to re-run the whole job.

pub mod patch;

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use k8s_openapi::api::core::v1::ConfigMap;
use kube::api::{Api, ApiResource, DynamicObject, Patch, PatchParams};
use kube::core::GroupVersionKind;
use kube::Client;
use serde::Serialize;
use tracing::info;

/// Cluster resources the key mapping is published to
#[derive(Debug, Clone)]
pub struct PublishTarget {
    /// Namespace both resources live in
    pub namespace: String,
    /// Name of the GPG key ConfigMap
    pub configmap_name: String,
    /// Name of the AppProject carrying the signature key list
    pub project_name: String,
}

/// Replace the AppProject signature key list and the ConfigMap data with the
/// collected mapping
///
/// The AppProject is patched first and its success logged before the
/// ConfigMap patch is attempted, so a partial run is visible in the log.
pub async fn publish(
    client: Client,
    target: &PublishTarget,
    keys: &BTreeMap<String, String>,
) -> Result<()> {
    let project_patch = to_json_patch(&patch::signature_keys_patch(keys))?;
    let config_patch = to_json_patch(&patch::config_data_patch(keys))?;

    // AppProject is an ArgoCD CRD, addressed dynamically by GVK
    let project_resource = ApiResource::from_gvk(&GroupVersionKind {
        group: "argoproj.io".to_string(),
        version: "v1alpha1".to_string(),
        kind: "AppProject".to_string(),
    });
    let projects: Api<DynamicObject> =
        Api::namespaced_with(client.clone(), &target.namespace, &project_resource);

    projects
        .patch(
            &target.project_name,
            &PatchParams::default(),
            &Patch::Json::<()>(project_patch),
        )
        .await
        .with_context(|| {
            format!(
                "failed to patch {} on AppProject {}/{}",
                patch::SIGNATURE_KEYS_PATH,
                target.namespace,
                target.project_name
            )
        })?;
    info!(
        "Replaced {} on AppProject {}/{}",
        patch::SIGNATURE_KEYS_PATH,
        target.namespace,
        target.project_name
    );

    let configmaps: Api<ConfigMap> = Api::namespaced(client, &target.namespace);
    configmaps
        .patch(
            &target.configmap_name,
            &PatchParams::default(),
            &Patch::Json::<()>(config_patch),
        )
        .await
        .with_context(|| {
            format!(
                "failed to patch {} on ConfigMap {}/{}",
                patch::CONFIG_DATA_PATH,
                target.namespace,
                target.configmap_name
            )
        })?;

    info!(
        "Patched GPG key ConfigMap {}/{} and AppProject {}/{} with {} keys",
        target.namespace,
        target.configmap_name,
        target.namespace,
        target.project_name,
        keys.len()
    );
    Ok(())
}

/// Convert a typed payload into the wire-format patch kube submits
fn to_json_patch<T: Serialize>(ops: &T) -> Result<json_patch::Patch> {
    let value = serde_json::to_value(ops).context("failed to serialize patch operations")?;
    serde_json::from_value(value).context("patch operations are not a valid JSON Patch document")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn typed_payloads_convert_to_wire_format_patches() {
        let keys = BTreeMap::from([("K1".to_string(), "block".to_string())]);

        let project = to_json_patch(&patch::signature_keys_patch(&keys)).expect("valid patch");
        assert_eq!(project.0.len(), 1);

        let config = to_json_patch(&patch::config_data_patch(&keys)).expect("valid patch");
        assert_eq!(config.0.len(), 1);
    }
}
