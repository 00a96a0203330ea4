use crate::{
    IdentityRejection, MAX_EMAIL_LENGTH, MAX_HANDLE_LENGTH, is_token_sha256, parse_body,
    sha256_hex, validate_submission,
};

use chrono::{TimeZone, Utc};
use googletest::prelude::*;
use serde_json::{Value, json};

fn valid_body() -> Value {
    json!({
        "schema_version": "v1",
        "captured_at_utc": "2026-03-01T10:00:00.000Z",
        "consent": true,
        "identity": {
            "email": "  Person@Example.COM ",
            "handle": "  node_null ",
            "token_sha256": format!(" {} ", sha256_hex("token")),
        }
    })
}

// =========================================================================
// parse_body
// =========================================================================

#[test]
fn given_malformed_json_when_parse_body_then_invalid_json() {
    assert_that!(parse_body(b"{not json"), err(eq(&IdentityRejection::InvalidJson)));
}

#[test]
fn given_json_string_body_when_parse_body_then_inner_document_parsed() {
    let inner = serde_json::to_string(&valid_body()).unwrap();
    let outer = serde_json::to_vec(&Value::String(inner)).unwrap();

    let parsed = parse_body(&outer).unwrap();

    assert_eq!(parsed["schema_version"], "v1");
}

#[test]
fn given_json_string_with_garbage_when_parse_body_then_invalid_json() {
    assert_that!(
        parse_body(br#""{not json""#),
        err(eq(&IdentityRejection::InvalidJson))
    );
}

#[test]
fn given_empty_body_when_parse_body_then_null() {
    assert_eq!(parse_body(b"").unwrap(), Value::Null);
    assert_eq!(parse_body(b"  \n").unwrap(), Value::Null);
}

// =========================================================================
// validate_submission: ordering
// =========================================================================

#[test]
fn given_wrong_schema_version_when_validate_then_schema_rejection_regardless_of_other_fields() {
    for version in [json!("v2"), json!("V1"), json!(1), json!(null)] {
        let mut body = valid_body();
        body["schema_version"] = version;
        body["consent"] = json!(false);
        body["identity"]["token_sha256"] = json!("nope");

        assert_that!(
            validate_submission(&body),
            err(eq(&IdentityRejection::SchemaVersionInvalid))
        );
    }
}

#[test]
fn given_null_body_when_validate_then_schema_rejection() {
    assert_that!(
        validate_submission(&Value::Null),
        err(eq(&IdentityRejection::SchemaVersionInvalid))
    );
}

#[test]
fn given_consent_not_literal_true_when_validate_then_consent_required() {
    for consent in [json!(false), json!("true"), json!(1), json!(null)] {
        let mut body = valid_body();
        body["consent"] = consent;
        body["identity"]["email"] = json!("x".repeat(MAX_EMAIL_LENGTH + 1));

        assert_that!(
            validate_submission(&body),
            err(eq(&IdentityRejection::ConsentRequired))
        );
    }
}

#[test]
fn given_email_too_long_when_validate_then_masks_handle_and_token_errors() {
    let mut body = valid_body();
    body["identity"]["email"] = json!("a".repeat(MAX_EMAIL_LENGTH + 1));
    body["identity"]["handle"] = json!("h".repeat(MAX_HANDLE_LENGTH + 1));
    body["identity"]["token_sha256"] = json!("bad");

    assert_that!(
        validate_submission(&body),
        err(eq(&IdentityRejection::EmailTooLong))
    );
}

#[test]
fn given_email_at_limit_after_trim_when_validate_then_ok() {
    let mut body = valid_body();
    body["identity"]["email"] = json!(format!("  {}  ", "a".repeat(MAX_EMAIL_LENGTH)));

    assert_that!(validate_submission(&body), ok(anything()));
}

#[test]
fn given_handle_too_long_when_validate_then_handle_too_long() {
    let mut body = valid_body();
    body["identity"]["handle"] = json!("h".repeat(MAX_HANDLE_LENGTH + 1));
    body["identity"]["token_sha256"] = json!("bad");

    assert_that!(
        validate_submission(&body),
        err(eq(&IdentityRejection::HandleTooLong))
    );
}

#[test]
fn given_handle_multibyte_at_limit_when_validate_then_counts_utf16_units() {
    let mut body = valid_body();
    body["identity"]["handle"] = json!("é".repeat(MAX_HANDLE_LENGTH));

    assert_that!(validate_submission(&body), ok(anything()));
}

#[test]
fn given_email_of_astral_chars_when_validate_then_surrogate_pairs_count_twice() {
    let mut body = valid_body();
    body["identity"]["email"] = json!("\u{1F600}".repeat(200));

    assert_that!(
        validate_submission(&body),
        err(eq(&IdentityRejection::EmailTooLong))
    );
}

#[test]
fn given_handle_of_astral_chars_when_validate_then_limit_in_utf16_units() {
    let mut body = valid_body();
    body["identity"]["handle"] = json!("\u{1F600}".repeat(MAX_HANDLE_LENGTH / 2));
    assert_that!(validate_submission(&body), ok(anything()));

    body["identity"]["handle"] = json!("\u{1F600}".repeat(MAX_HANDLE_LENGTH / 2 + 1));
    assert_that!(
        validate_submission(&body),
        err(eq(&IdentityRejection::HandleTooLong))
    );
}

#[test]
fn given_malformed_token_when_validate_then_token_rejection() {
    let bad_tokens = [
        "abc".to_string(),
        "g".repeat(64),
        "a".repeat(63),
        "a".repeat(65),
        format!("{}z", "a".repeat(63)),
    ];

    for token in bad_tokens {
        let mut body = valid_body();
        body["identity"]["token_sha256"] = json!(token);

        assert_that!(
            validate_submission(&body),
            err(eq(&IdentityRejection::TokenSha256Invalid))
        );
    }
}

#[test]
fn given_uppercase_token_when_validate_then_accepted_and_case_preserved() {
    let upper = sha256_hex("token").to_uppercase();
    let mut body = valid_body();
    body["identity"]["token_sha256"] = json!(upper.clone());

    let validated = validate_submission(&body).unwrap();

    assert_eq!(validated.identity.token_sha256, Some(upper));
}

// =========================================================================
// validate_submission: normalisation
// =========================================================================

#[test]
fn given_valid_body_when_validate_then_fields_normalised() {
    let validated = validate_submission(&valid_body()).unwrap();

    assert_eq!(
        validated.identity.email.as_deref(),
        Some("person@example.com")
    );
    assert_eq!(validated.identity.handle.as_deref(), Some("node_null"));
    assert_eq!(validated.identity.token_sha256, Some(sha256_hex("token")));
    assert_eq!(
        validated.captured_at_utc.as_deref(),
        Some("2026-03-01T10:00:00.000Z")
    );
}

#[test]
fn given_minimal_body_when_validate_then_identity_fields_none() {
    let body = json!({"schema_version": "v1", "consent": true});

    let validated = validate_submission(&body).unwrap();

    assert!(validated.identity.email.is_none());
    assert!(validated.identity.handle.is_none());
    assert!(validated.identity.token_sha256.is_none());
    assert!(validated.captured_at_utc.is_none());
}

#[test]
fn given_non_string_fields_when_validate_then_treated_as_absent() {
    let body = json!({
        "schema_version": "v1",
        "consent": true,
        "captured_at_utc": 1700000000,
        "identity": {"email": 42, "handle": ["x"], "token_sha256": false}
    });

    let validated = validate_submission(&body).unwrap();

    assert!(validated.identity.email.is_none());
    assert!(validated.identity.handle.is_none());
    assert!(validated.identity.token_sha256.is_none());
    assert!(validated.captured_at_utc.is_none());
}

#[test]
fn given_blank_token_when_validate_then_skips_format_check() {
    let mut body = valid_body();
    body["identity"]["token_sha256"] = json!("   ");

    let validated = validate_submission(&body).unwrap();

    assert_eq!(validated.identity.token_sha256.as_deref(), Some(""));
}

#[test]
fn given_validated_identity_when_into_event_then_server_fields_stamped() {
    let received = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 1).unwrap();

    let event = validate_submission(&valid_body())
        .unwrap()
        .into_event(received);

    assert_eq!(event.schema_version, "v1");
    assert_eq!(event.source, "forge");
    assert_eq!(event.received_at_utc, "2026-03-01T10:00:01.000Z");
    assert_eq!(
        event.captured_at_utc.as_deref(),
        Some("2026-03-01T10:00:00.000Z")
    );
}

#[test]
fn test_is_token_sha256() {
    assert!(is_token_sha256(&sha256_hex("x")));
    assert!(is_token_sha256(&sha256_hex("x").to_uppercase()));
    assert!(!is_token_sha256(""));
    assert!(!is_token_sha256(&"é".repeat(32)));
}

#[test]
fn test_rejection_codes() {
    assert_eq!(IdentityRejection::InvalidJson.code(), "invalid_json");
    assert_eq!(
        IdentityRejection::SchemaVersionInvalid.code(),
        "schema_version_invalid"
    );
    assert_eq!(IdentityRejection::ConsentRequired.code(), "consent_required");
    assert_eq!(IdentityRejection::EmailTooLong.code(), "email_too_long");
    assert_eq!(IdentityRejection::HandleTooLong.code(), "handle_too_long");
    assert_eq!(
        IdentityRejection::TokenSha256Invalid.code(),
        "token_sha256_invalid"
    );
}
