use crate::{IdentityEvent, RedactedIdentity, format_utc};

use chrono::{TimeZone, Utc};

#[test]
fn test_format_utc_uses_millis_and_z_suffix() {
    let ts = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    assert_eq!(format_utc(ts), "2026-01-02T03:04:05.000Z");
}

#[test]
fn test_event_sets_server_owned_fields() {
    let ts = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    let event = IdentityEvent::new(RedactedIdentity::default(), None, ts);
    let json = serde_json::to_value(&event).unwrap();

    assert_eq!(json["schema_version"], "v1");
    assert_eq!(json["source"], "forge");
    assert_eq!(json["received_at_utc"], "2026-01-02T03:04:05.000Z");
    assert!(json["captured_at_utc"].is_null());
    assert!(json["identity"]["email"].is_null());
}
