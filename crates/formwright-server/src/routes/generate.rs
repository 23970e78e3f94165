//! `POST /generate-form`

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use formwright::{
    GenerationRequest,
    error::FormError,
    trace::{RequestId, RequestTrace},
    types::FieldDescriptor,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{routes::error::GenerationFailure, state::AppState};

#[derive(Debug, Deserialize)]
pub struct GenerateFormRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateFormResponse {
    pub success: bool,
    pub fields: Vec<FieldDescriptor>,
    pub request_id: RequestId,
    pub response_time: String,
}

pub async fn generate_form(
    State(state): State<AppState>,
    payload: Result<Json<GenerateFormRequest>, JsonRejection>,
) -> Result<Json<GenerateFormResponse>, GenerationFailure> {
    let trace = RequestTrace::start();
    let request_id = trace.id();

    let Json(body) = payload.map_err(|rejection| {
        let error = FormError::InvalidRequest(rejection.body_text());
        warn!(%request_id, kind = error.kind(), error = %error, "rejected generation request");
        GenerationFailure::new(error, &trace)
    })?;

    info!(%request_id, query_len = body.query.len(), "accepted generation request");

    let request = GenerationRequest::new(body.query, trace);
    let result = state
        .generator
        .generate(&request)
        .await
        .map_err(|error| GenerationFailure::new(error, request.trace()))?;

    Ok(Json(GenerateFormResponse {
        success: true,
        fields: result.fields,
        request_id: result.request_id,
        response_time: request.trace().response_time(),
    }))
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
        time::Duration,
    };

    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_partial_json, header, method, path},
    };

    use crate::routes::{build_router, error::GENERATION_FAILED, test_support::*};

    const TIMEOUT: Duration = Duration::from_secs(2);

    fn completion(content: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "model": "llama3-70b-8192",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 120, "completion_tokens": 80, "total_tokens": 200}
        }))
    }

    async fn mock_completion(server: &MockServer, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(response)
            .mount(server)
            .await;
    }

    fn assert_failure(body: &Value, status_text: &str) {
        assert_eq!(body["error"], GENERATION_FAILED);
        assert!(
            body["message"].as_str().is_some_and(|m| m.contains(status_text)),
            "unexpected message: {}",
            body["message"]
        );
        assert_eq!(body["requestId"].as_str().map(str::len), Some(36));
    }

    #[tokio::test]
    async fn returns_validated_fields() {
        let server = MockServer::start().await;
        let fields = json!({ "fields": [
            {"label": "Full name", "name": "full_name", "type": "text", "required": "true"},
            {"label": "Email", "name": "email", "type": "email", "required": true,
             "placeholder": "you@example.com"},
            {"label": "Plan", "name": "plan", "type": "radio", "options": ["Free", "Pro"],
             "defaultValue": "Free"}
        ]});
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer gsk_test"))
            .and(body_partial_json(json!({
                "model": "llama3-70b-8192",
                "temperature": 0.3,
                "max_tokens": 2000,
                "response_format": {"type": "json_object"}
            })))
            .respond_with(completion(&fields.to_string()))
            .expect(1)
            .mount(&server)
            .await;
        let app = build_router(state_for(&server.uri(), Some("gsk_test"), TIMEOUT));

        let (status, body) = send(
            app,
            post_json("/generate-form", &json!({"query": "Signup form with plan choice"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(
            body["fields"],
            json!([
                {"label": "Full name", "name": "full_name", "type": "text", "required": true,
                 "options": [], "placeholder": "", "defaultValue": null},
                {"label": "Email", "name": "email", "type": "email", "required": true,
                 "options": [], "placeholder": "you@example.com", "defaultValue": null},
                {"label": "Plan", "name": "plan", "type": "radio", "required": false,
                 "options": ["Free", "Pro"], "placeholder": "", "defaultValue": "Free"}
            ])
        );
        assert!(body["responseTime"].as_str().is_some_and(|t| t.ends_with("ms")));
        assert_eq!(body["requestId"].as_str().map(str::len), Some(36));
    }

    #[tokio::test]
    async fn blank_query_is_rejected_without_calling_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(completion("[]"))
            .expect(0)
            .mount(&server)
            .await;

        for body in [json!({"query": "   "}), json!({})] {
            let app = build_router(state_for(&server.uri(), Some("gsk_test"), TIMEOUT));
            let (status, body) = send(app, post_json("/generate-form", &body)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_failure(&body, "query is required");
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_bad_request() {
        let app = build_router(state_for("http://127.0.0.1:9", Some("k"), TIMEOUT));

        let (status, body) = send(app, post_raw("/generate-form", "{\"query\": ")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_failure(&body, "invalid request");
    }

    #[tokio::test]
    async fn missing_key_is_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(completion("[]"))
            .expect(0)
            .mount(&server)
            .await;
        let app = build_router(state_for(&server.uri(), None, TIMEOUT));

        let (status, body) =
            send(app, post_json("/generate-form", &json!({"query": "contact form"}))).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_failure(&body, "API key");
    }

    #[tokio::test]
    async fn upstream_status_and_body_are_echoed() {
        let server = MockServer::start().await;
        let upstream = json!({"error": {"message": "Rate limit reached", "type": "tokens"}});
        mock_completion(&server, ResponseTemplate::new(429).set_body_json(&upstream)).await;
        let app = build_router(state_for(&server.uri(), Some("k"), TIMEOUT));

        let (status, body) =
            send(app, post_json("/generate-form", &json!({"query": "contact form"}))).await;

        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_failure(&body, "429");
        assert_eq!(body["apiError"], upstream);
        assert_eq!(body["statusCode"], 429);
    }

    #[tokio::test]
    async fn non_json_upstream_error_body_is_kept_as_text() {
        let server = MockServer::start().await;
        mock_completion(
            &server,
            ResponseTemplate::new(503).set_body_string("upstream overloaded"),
        )
        .await;
        let app = build_router(state_for(&server.uri(), Some("k"), TIMEOUT));

        let (status, body) =
            send(app, post_json("/generate-form", &json!({"query": "contact form"}))).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["apiError"], "upstream overloaded");
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn slow_upstream_times_out_with_logged_request_id() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let server = MockServer::start().await;
        mock_completion(
            &server,
            completion("[]").set_delay(Duration::from_millis(500)),
        )
        .await;
        let app = build_router(state_for(&server.uri(), Some("k"), Duration::from_millis(100)));

        let (status, body) =
            send(app, post_json("/generate-form", &json!({"query": "contact form"}))).await;

        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_failure(&body, "timeout after 100ms");

        let request_id = body["requestId"].as_str().unwrap();
        let logs = logs.contents();
        assert!(
            logs.contains(&format!("request_id={request_id}")),
            "request id missing from logs:\n{logs}"
        );
        assert!(logs.contains("accepted generation request"));
    }

    #[tokio::test]
    async fn token_usage_is_logged_after_the_call() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let server = MockServer::start().await;
        mock_completion(
            &server,
            completion(r#"[{"label": "Name", "name": "name", "type": "text"}]"#),
        )
        .await;
        let app = build_router(state_for(&server.uri(), Some("k"), TIMEOUT));

        let (status, _) =
            send(app, post_json("/generate-form", &json!({"query": "contact form"}))).await;
        assert_eq!(status, StatusCode::OK);

        let logs = logs.contents();
        let responded = logs
            .lines()
            .find(|line| line.contains("completion endpoint responded"))
            .unwrap_or_else(|| panic!("no completion log line:\n{logs}"));
        assert!(responded.contains("prompt_tokens=120"), "{responded}");
        assert!(responded.contains("completion_tokens=80"), "{responded}");
        assert!(responded.contains("total_tokens=200"), "{responded}");
    }

    #[tokio::test]
    async fn prose_completion_is_invalid_model_json() {
        let server = MockServer::start().await;
        mock_completion(&server, completion("not json {")).await;
        let app = build_router(state_for(&server.uri(), Some("k"), TIMEOUT));

        let (status, body) =
            send(app, post_json("/generate-form", &json!({"query": "contact form"}))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_failure(&body, "invalid JSON");
    }

    #[tokio::test]
    async fn json_without_field_array_is_rejected() {
        let server = MockServer::start().await;
        mock_completion(&server, completion(r#"{"title": "Contact", "version": 2}"#)).await;
        let app = build_router(state_for(&server.uri(), Some("k"), TIMEOUT));

        let (status, body) =
            send(app, post_json("/generate-form", &json!({"query": "contact form"}))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_failure(&body, "did not contain valid form fields");
    }

    #[tokio::test]
    async fn one_invalid_field_fails_the_request() {
        let server = MockServer::start().await;
        let candidates = json!([
            {"label": "Name", "name": "name", "type": "text"},
            {"label": "Email", "name": "email", "type": "email"},
            {"label": "Phone", "type": "tel"},
            {"label": "Notes", "name": "notes", "type": "textarea"}
        ]);
        mock_completion(&server, completion(&candidates.to_string())).await;
        let app = build_router(state_for(&server.uri(), Some("k"), TIMEOUT));

        let (status, body) =
            send(app, post_json("/generate-form", &json!({"query": "contact form"}))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_failure(&body, "field at position 2 is invalid");
        assert!(body.get("fields").is_none());
    }

    #[tokio::test]
    async fn success_without_completion_text_is_malformed() {
        let server = MockServer::start().await;
        mock_completion(
            &server,
            ResponseTemplate::new(200).set_body_json(json!({"choices": []})),
        )
        .await;
        let app = build_router(state_for(&server.uri(), Some("k"), TIMEOUT));

        let (status, body) =
            send(app, post_json("/generate-form", &json!({"query": "contact form"}))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_failure(&body, "invalid response structure");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_bad_gateway() {
        let app = build_router(state_for("http://127.0.0.1:9", Some("k"), TIMEOUT));

        let (status, body) =
            send(app, post_json("/generate-form", &json!({"query": "contact form"}))).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_failure(&body, "completion request failed");
    }
}
