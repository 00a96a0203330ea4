use crate::LifecycleStatus;

#[test]
fn test_lifecycle_status_from_label() {
    assert_eq!(LifecycleStatus::from_label("active"), LifecycleStatus::Active);
    assert_eq!(LifecycleStatus::from_label("draft"), LifecycleStatus::Draft);
    assert_eq!(LifecycleStatus::from_label("pending"), LifecycleStatus::Pending);
    assert_eq!(LifecycleStatus::from_label("retired"), LifecycleStatus::Unknown);
    assert_eq!(LifecycleStatus::from_label("ACTIVE"), LifecycleStatus::Unknown);
}

#[test]
fn test_lifecycle_status_visibility() {
    assert!(LifecycleStatus::Active.is_visible(false));
    assert!(!LifecycleStatus::Draft.is_visible(false));
    assert!(!LifecycleStatus::Pending.is_visible(false));
    assert!(LifecycleStatus::Draft.is_visible(true));
    assert!(LifecycleStatus::Pending.is_visible(true));
    assert!(!LifecycleStatus::Unknown.is_visible(true));
}

#[test]
fn test_lifecycle_status_non_string_deserializes_unknown() {
    let status: LifecycleStatus = serde_json::from_str("42").unwrap();
    assert_eq!(status, LifecycleStatus::Unknown);
}

#[test]
fn test_lifecycle_status_default() {
    assert_eq!(LifecycleStatus::default(), LifecycleStatus::Unknown);
}
