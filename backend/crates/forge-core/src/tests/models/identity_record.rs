use crate::{IdentityRecord, sha256_hex};

#[test]
fn given_padded_fields_when_from_form_then_trimmed() {
    let record = IdentityRecord::from_form("  a@b.com ", "\tnode\n", " tok ");

    assert_eq!(record.email.as_deref(), Some("a@b.com"));
    assert_eq!(record.handle.as_deref(), Some("node"));
    assert_eq!(record.token.as_deref(), Some("tok"));
}

#[test]
fn given_blank_fields_when_from_form_then_none() {
    let record = IdentityRecord::from_form("", "   ", "\n");

    assert!(record.is_empty());
}

#[test]
fn given_token_when_redacted_then_only_digest_present() {
    let record = IdentityRecord::from_form("A@B.com", "handle", "raw-secret");
    let redacted = record.redacted();

    assert_eq!(redacted.email.as_deref(), Some("A@B.com"));
    assert_eq!(redacted.handle.as_deref(), Some("handle"));
    assert_eq!(redacted.token_sha256, Some(sha256_hex("raw-secret")));

    let json = serde_json::to_string(&redacted).unwrap();
    assert!(!json.contains("raw-secret"));
}

#[test]
fn given_no_token_when_redacted_then_digest_is_null() {
    let record = IdentityRecord::from_form("", "handle", "");
    let json = serde_json::to_value(record.redacted()).unwrap();

    assert!(json["token_sha256"].is_null());
    assert!(json["email"].is_null());
}

#[test]
fn given_partial_json_when_deserialize_then_missing_fields_none() {
    let record: IdentityRecord = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();

    assert_eq!(record.email.as_deref(), Some("a@b.com"));
    assert!(record.handle.is_none());
    assert!(record.token.is_none());
}
