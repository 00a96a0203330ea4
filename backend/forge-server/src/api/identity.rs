use crate::AppState;
use crate::api::response::IdentityResponse;

use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::Method,
};
use forge_core::{parse_body, validate_submission};
use log::{error, info, warn};

/// `/api/identity`: validate a redacted identity submission and forward
/// it to the configured sink.
///
/// Checks run in order and the first failure answers: method, sink
/// configured, body read, body parse, field validation, sink delivery.
/// Bodies over axum's default limit answer 413 `payload_too_large`.
pub async fn identity_handler(
    State(state): State<AppState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> IdentityResponse {
    if method != Method::POST {
        warn!("Identity endpoint refused method {method}");
        return IdentityResponse::MethodNotAllowed;
    }

    let Some(ref sink) = state.sink else {
        warn!("Identity submission refused: capture disabled");
        return IdentityResponse::CaptureDisabled;
    };

    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!("Identity submission body unreadable: {rejection}");
            return IdentityResponse::BodyRejected(rejection.status());
        }
    };

    let submission = match parse_body(&body).and_then(|value| validate_submission(&value)) {
        Ok(submission) => submission,
        Err(rejection) => {
            warn!("Identity submission rejected: {}", rejection.code());
            return rejection.into();
        }
    };

    let event = submission.into_event(chrono::Utc::now());

    match sink.deliver(&event).await {
        Ok(()) => {
            info!("Identity event forwarded to sink");
            IdentityResponse::Accepted
        }
        Err(e) => {
            error!("Identity sink delivery failed: {e}");
            e.into()
        }
    }
}
