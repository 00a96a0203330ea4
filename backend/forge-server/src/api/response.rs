//! Responses of the identity endpoint.
//!
//! Every response, success or failure, is a JSON object with an `ok` flag,
//! `content-type: application/json; charset=utf-8` and `cache-control: no-store`.

use crate::sink::SinkError;

use axum::{
    Json,
    http::{
        HeaderValue, StatusCode,
        header::{ALLOW, CACHE_CONTROL, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use forge_core::IdentityRejection;
use serde_json::{Value, json};

pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";
pub const DISABLED_HINT: &str =
    "Set IDENTITY_WEBHOOK_URL in the server environment to enable server capture.";

#[derive(Debug)]
pub enum IdentityResponse {
    Accepted,
    MethodNotAllowed,
    CaptureDisabled,
    /// The body could not be read (too large, or the stream failed)
    BodyRejected(StatusCode),
    Rejected(IdentityRejection),
    SinkFailed(SinkError),
}

impl IdentityResponse {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Accepted => StatusCode::OK,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::CaptureDisabled => StatusCode::NOT_IMPLEMENTED,
            Self::BodyRejected(status) => *status,
            Self::Rejected(_) => StatusCode::BAD_REQUEST,
            Self::SinkFailed(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn body(&self) -> Value {
        match self {
            Self::Accepted => json!({ "ok": true }),
            Self::MethodNotAllowed => json!({ "ok": false, "error": "method_not_allowed" }),
            Self::CaptureDisabled => json!({
                "ok": false,
                "error": "identity_capture_disabled",
                "hint": DISABLED_HINT,
            }),
            Self::BodyRejected(StatusCode::PAYLOAD_TOO_LARGE) => {
                json!({ "ok": false, "error": "payload_too_large" })
            }
            Self::BodyRejected(_) => json!({ "ok": false, "error": "body_unreadable" }),
            Self::Rejected(rejection) => json!({ "ok": false, "error": rejection.code() }),
            Self::SinkFailed(SinkError::Rejected { status, .. }) => {
                json!({ "ok": false, "error": "sink_failed", "status": status })
            }
            Self::SinkFailed(SinkError::Unreachable { .. }) => {
                json!({ "ok": false, "error": "sink_unreachable" })
            }
        }
    }
}

impl From<IdentityRejection> for IdentityResponse {
    fn from(rejection: IdentityRejection) -> Self {
        IdentityResponse::Rejected(rejection)
    }
}

impl From<SinkError> for IdentityResponse {
    fn from(err: SinkError) -> Self {
        IdentityResponse::SinkFailed(err)
    }
}

impl IntoResponse for IdentityResponse {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = (status, Json(self.body())).into_response();

        let headers = response.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        if matches!(self, Self::MethodNotAllowed) {
            headers.insert(ALLOW, HeaderValue::from_static("POST"));
        }

        response
    }
}
