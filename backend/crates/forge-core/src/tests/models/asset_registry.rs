use crate::{AssetRegistry, LifecycleStatus};

use googletest::prelude::*;

const REGISTRY: &str = r#"{
    "assets": [
        {"asset_id": "NNASSET-0001-weekly-signal-brief", "asset_name": "Weekly Signal Brief",
         "asset_version": "1.0.0", "surface_type": "pdf", "value_type": "report",
         "lifecycle_status": "active"},
        {"asset_id": "NNASSET-0002", "asset_version": 2, "lifecycle_status": "draft"},
        {"asset_id": "NNASSET-0003", "lifecycle_status": "pending"},
        {"asset_id": "NNASSET-0004"}
    ]
}"#;

#[test]
fn given_registry_when_drafts_hidden_then_only_active_visible() {
    let registry = AssetRegistry::from_slice(REGISTRY.as_bytes()).unwrap();
    let visible = registry.visible(false);

    assert_that!(visible.len(), eq(1));
    assert_that!(
        visible[0].asset_id.as_deref(),
        some(eq("NNASSET-0001-weekly-signal-brief"))
    );
}

#[test]
fn given_registry_when_drafts_shown_then_draft_and_pending_visible() {
    let registry = AssetRegistry::from_slice(REGISTRY.as_bytes()).unwrap();
    let visible = registry.visible(true);

    assert_that!(visible.len(), eq(3));
    assert_that!(visible[1].lifecycle_status, eq(LifecycleStatus::Draft));
    assert_that!(visible[2].lifecycle_status, eq(LifecycleStatus::Pending));
}

#[test]
fn given_numeric_version_when_parse_then_stringified() {
    let registry = AssetRegistry::from_slice(REGISTRY.as_bytes()).unwrap();

    assert_that!(registry.assets[1].asset_version.as_deref(), some(eq("2")));
}

#[test]
fn given_missing_status_when_parse_then_unknown() {
    let registry = AssetRegistry::from_slice(REGISTRY.as_bytes()).unwrap();

    assert_that!(registry.assets[3].lifecycle_status, eq(LifecycleStatus::Unknown));
}

#[test]
fn given_assets_not_array_when_parse_then_empty() {
    let registry = AssetRegistry::from_slice(br#"{"assets": {"a": 1}}"#).unwrap();

    assert_that!(registry.assets, is_empty());
}

#[test]
fn given_non_object_entries_when_parse_then_skipped() {
    let registry = AssetRegistry::from_slice(
        br#"{"assets": ["stray", 7, null, [1], {"asset_id": "A-1", "lifecycle_status": "active"}]}"#,
    )
    .unwrap();

    assert_that!(registry.assets.len(), eq(1));
    assert_that!(registry.assets[0].asset_id.as_deref(), some(eq("A-1")));
}

#[test]
fn given_malformed_json_when_parse_then_error() {
    let result = AssetRegistry::from_slice(b"{not json");

    assert_that!(result, err(anything()));
}

#[test]
fn test_display_name_fallbacks() {
    let registry = AssetRegistry::from_slice(REGISTRY.as_bytes()).unwrap();

    assert_eq!(registry.assets[0].display_name(), "Weekly Signal Brief");
    assert_eq!(registry.assets[1].display_name(), "NNASSET-0002");
    assert_eq!(
        crate::AssetDescriptor::default().display_name(),
        "asset"
    );
}
