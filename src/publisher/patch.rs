//! # Patch Payload Construction
//!
//! Builds the two JSON Patch payloads applied to the cluster. Each payload is
//! a single-element list with one `replace` operation, matching RFC 6902.
//!
//! Construction is pure so the payloads can be asserted on without a cluster.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field path of the trusted signature key list on an ArgoCD AppProject
pub const SIGNATURE_KEYS_PATH: &str = "/spec/signatureKeys";

/// Field path of the data mapping on a ConfigMap
pub const CONFIG_DATA_PATH: &str = "/data";

/// One entry of the AppProject `signatureKeys` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureKey {
    #[serde(rename = "keyID")]
    pub key_id: String,
}

/// A single RFC 6902 `replace` operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaceOp<T> {
    pub op: &'static str,
    pub path: &'static str,
    pub value: T,
}

impl<T> ReplaceOp<T> {
    fn new(path: &'static str, value: T) -> Self {
        Self {
            op: "replace",
            path,
            value,
        }
    }
}

/// Build the AppProject patch: replace the signature key list with the key
/// set of the mapping
pub fn signature_keys_patch(
    keys: &BTreeMap<String, String>,
) -> Vec<ReplaceOp<Vec<SignatureKey>>> {
    let signature_keys = keys
        .keys()
        .map(|id| SignatureKey { key_id: id.clone() })
        .collect();
    vec![ReplaceOp::new(SIGNATURE_KEYS_PATH, signature_keys)]
}

/// Build the ConfigMap patch: replace the data field with the mapping verbatim
pub fn config_data_patch(
    keys: &BTreeMap<String, String>,
) -> Vec<ReplaceOp<BTreeMap<String, String>>> {
    vec![ReplaceOp::new(CONFIG_DATA_PATH, keys.clone())]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_keys() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("K1".to_string(), "blockB2".to_string()),
            ("K2".to_string(), "blockB".to_string()),
            ("4AEE18F83AFDEB23".to_string(), "web-flow".to_string()),
        ])
    }

    #[test]
    fn signature_patch_is_one_replace_op_on_the_spec_path() {
        let patch = signature_keys_patch(&sample_keys());
        assert_eq!(patch.len(), 1);
        assert_eq!(patch[0].op, "replace");
        assert_eq!(patch[0].path, "/spec/signatureKeys");
    }

    #[test]
    fn signature_patch_lists_exactly_the_key_set() {
        let keys = sample_keys();
        let patch = signature_keys_patch(&keys);

        let mut ids: Vec<_> = patch[0].value.iter().map(|k| k.key_id.clone()).collect();
        ids.sort();
        let mut expected: Vec<_> = keys.keys().cloned().collect();
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[test]
    fn config_patch_carries_the_mapping_verbatim() {
        let keys = sample_keys();
        let patch = config_data_patch(&keys);

        assert_eq!(patch.len(), 1);
        assert_eq!(patch[0].op, "replace");
        assert_eq!(patch[0].path, "/data");
        assert_eq!(patch[0].value, keys);
    }

    #[test]
    fn payloads_are_byte_identical_across_builds() {
        let keys = sample_keys();

        let first = serde_json::to_vec(&signature_keys_patch(&keys)).expect("serialize");
        let second = serde_json::to_vec(&signature_keys_patch(&keys)).expect("serialize");
        assert_eq!(first, second);

        let first = serde_json::to_vec(&config_data_patch(&keys)).expect("serialize");
        let second = serde_json::to_vec(&config_data_patch(&keys)).expect("serialize");
        assert_eq!(first, second);
    }

    #[test]
    fn signature_key_serializes_with_upper_camel_id_field() {
        let json = serde_json::to_value(SignatureKey {
            key_id: "K1".to_string(),
        })
        .expect("serialize");
        assert_eq!(json, serde_json::json!({"keyID": "K1"}));
    }

    #[test]
    fn empty_mapping_produces_empty_replacements() {
        let keys = BTreeMap::new();
        assert!(signature_keys_patch(&keys)[0].value.is_empty());
        assert!(config_data_patch(&keys)[0].value.is_empty());
    }
}
