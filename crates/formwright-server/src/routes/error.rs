//! Mapping of pipeline errors onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use formwright::{
    error::FormError,
    trace::{RequestId, RequestTrace},
};
use serde::Serialize;
use serde_json::Value;

/// Constant `error` text of every failed generation.
pub const GENERATION_FAILED: &str = "Form generation failed";

/// A failed generation together with the request it belongs to.
#[derive(Debug)]
pub struct GenerationFailure {
    pub error: FormError,
    pub request_id: RequestId,
    pub response_time: String,
}

impl GenerationFailure {
    pub fn new(error: FormError, trace: &RequestTrace) -> Self {
        Self {
            error,
            request_id: trace.id(),
            response_time: trace.response_time(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    error: &'static str,
    message: String,
    request_id: RequestId,
    response_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_error: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,
}

/// HTTP status for each failure kind.
pub fn status_for(error: &FormError) -> StatusCode {
    match error {
        FormError::EmptyQuery | FormError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        FormError::MisconfiguredCredentials => StatusCode::UNAUTHORIZED,
        FormError::UpstreamTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        FormError::UpstreamError { status, .. } => StatusCode::from_u16(*status)
            .ok()
            .filter(|status| status.is_client_error() || status.is_server_error())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        FormError::Transport(_) => StatusCode::BAD_GATEWAY,
        FormError::MalformedUpstreamResponse(_)
        | FormError::InvalidModelJson(_)
        | FormError::NoFieldArrayFound
        | FormError::InvalidFieldAt { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for GenerationFailure {
    fn into_response(self) -> Response {
        let status = status_for(&self.error);

        let (api_error, status_code) = match &self.error {
            FormError::UpstreamError { status, body } => (
                Some(
                    serde_json::from_str::<Value>(body)
                        .unwrap_or_else(|_| Value::String(body.clone())),
                ),
                Some(*status),
            ),
            _ => (None, None),
        };

        let body = ErrorBody {
            error: GENERATION_FAILED,
            message: self.error.to_string(),
            request_id: self.request_id,
            response_time: self.response_time,
            api_error,
            status_code,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use formwright::error::FieldDefect;

    use super::*;

    #[test]
    fn statuses_follow_the_error_kind() {
        let cases = [
            (FormError::EmptyQuery, 400),
            (FormError::InvalidRequest("bad".into()), 400),
            (FormError::MisconfiguredCredentials, 401),
            (
                FormError::UpstreamTimeout {
                    timeout: Duration::from_secs(15),
                },
                504,
            ),
            (
                FormError::UpstreamError {
                    status: 429,
                    body: String::new(),
                },
                429,
            ),
            (
                FormError::UpstreamError {
                    status: 302,
                    body: String::new(),
                },
                500,
            ),
            (FormError::Transport("connection reset".into()), 502),
            (FormError::MalformedUpstreamResponse("x".into()), 500),
            (FormError::NoFieldArrayFound, 500),
            (
                FormError::InvalidFieldAt {
                    index: 1,
                    defect: FieldDefect::NotAnObject,
                },
                500,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(status_for(&error).as_u16(), expected, "{error}");
        }
    }
}
