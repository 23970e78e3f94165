//! Draft form storage endpoints

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use formwright::types::validate::validate_fields;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    state::AppState,
    store::{FormId, FormStatus, NewForm, SavedForm, UserId},
};

pub const SAVE_FIELDS_REQUIRED: &str = "User ID, title, and form fields are required";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFormRequest {
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub fields: Option<Vec<Value>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFormResponse {
    pub message: &'static str,
    pub form_id: FormId,
    pub status: FormStatus,
}

#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorMessage {
    fn bad_request(message: Option<String>) -> (StatusCode, Json<Self>) {
        (
            StatusCode::BAD_REQUEST,
            Json(Self {
                error: SAVE_FIELDS_REQUIRED,
                message,
            }),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct UserFormsResponse {
    pub forms: Vec<SavedForm>,
}

pub async fn save_form(
    State(state): State<AppState>,
    payload: Result<Json<SaveFormRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SaveFormResponse>), (StatusCode, Json<ErrorMessage>)> {
    let Json(body) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected save request");
        ErrorMessage::bad_request(None)
    })?;

    let (Some(user_id), Some(title), Some(candidates)) = (
        body.user_id,
        body.title.filter(|title| !title.trim().is_empty()),
        body.fields,
    ) else {
        return Err(ErrorMessage::bad_request(None));
    };

    // Stored drafts obey the same field contract as generated ones.
    let fields = validate_fields(&candidates).map_err(|err| {
        warn!(
            error_kind = err.kind(),
            field_index = err.field_index(),
            error = %err,
            "rejected save request"
        );
        ErrorMessage::bad_request(Some(err.to_string()))
    })?;

    let saved = state.store.save(NewForm {
        user_id,
        title,
        fields,
    });
    info!(
        form_id = saved.form_id,
        user_id = %saved.user_id,
        field_count = saved.fields.len(),
        "saved draft form"
    );

    Ok((
        StatusCode::CREATED,
        Json(SaveFormResponse {
            message: "Form saved successfully",
            form_id: saved.form_id,
            status: saved.status,
        }),
    ))
}

pub async fn list_user_forms(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<UserFormsResponse> {
    let forms = UserId::new(user_id)
        .map(|user_id| state.store.list_for_user(&user_id))
        .unwrap_or_default();
    debug!(count = forms.len(), "listed user forms");

    Json(UserFormsResponse { forms })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::http::StatusCode;
    use serde_json::json;

    use super::SAVE_FIELDS_REQUIRED;
    use crate::routes::{build_router, test_support::*};

    fn app() -> axum::Router {
        build_router(state_for("http://127.0.0.1:9", None, Duration::from_secs(1)))
    }

    #[tokio::test]
    async fn saved_forms_are_listed_field_for_field() {
        let app = app();
        let fields = json!([
            {"label": "Name", "name": "name", "type": "text", "required": true,
             "options": [], "placeholder": "Jane Doe", "defaultValue": null},
            {"label": "Size", "name": "size", "type": "select", "required": false,
             "options": ["S", "M", "L"], "placeholder": "", "defaultValue": "M"}
        ]);

        let (status, saved) = send(
            app.clone(),
            post_json(
                "/api/forms/save",
                &json!({"userId": 7, "title": "T-shirt order", "fields": fields}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(saved["message"], "Form saved successfully");
        assert_eq!(saved["status"], "draft");

        let (status, listed) = send(app, get("/api/user/7")).await;
        assert_eq!(status, StatusCode::OK);

        let forms = listed["forms"].as_array().unwrap();
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0]["formId"], saved["formId"]);
        assert_eq!(forms[0]["userId"], "7");
        assert_eq!(forms[0]["title"], "T-shirt order");
        assert_eq!(forms[0]["status"], "draft");
        assert!(forms[0]["createdAt"].is_string());
        assert_eq!(forms[0]["fields"], fields);
    }

    #[tokio::test]
    async fn incomplete_saves_are_rejected() {
        let fields = json!([{"label": "Name", "name": "name", "type": "text"}]);
        let bodies = [
            json!({"title": "Survey", "fields": fields}),
            json!({"userId": "u1", "title": "  ", "fields": fields}),
            json!({"userId": "u1", "fields": fields}),
            json!({"userId": "u1", "title": "Survey"}),
            json!({"userId": "u1", "title": "Survey", "fields": "name"}),
        ];

        for body in bodies {
            let (status, response) = send(app(), post_json("/api/forms/save", &body)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(response, json!({"error": SAVE_FIELDS_REQUIRED}));
        }
    }

    #[tokio::test]
    async fn saves_with_invalid_fields_are_rejected_and_not_stored() {
        let cases = [
            (
                json!([
                    {"label": "", "name": "", "type": "radio"},
                    {"label": "X", "name": "", "type": "select", "options": []}
                ]),
                "field at position 0 is invalid: missing or empty `label`",
            ),
            (
                json!([
                    {"label": "Colour", "name": "colour", "type": "radio", "options": ["Red"]},
                    {"label": "Size", "name": "size", "type": "select", "options": []}
                ]),
                "field at position 1 is invalid: `select` field has no options",
            ),
            (
                json!([
                    {"label": "Email", "name": "email", "type": "email"},
                    {"label": "Backup email", "name": "email", "type": "email"}
                ]),
                "field at position 1 is invalid: name `email` is already used by an earlier field",
            ),
        ];

        for (fields, message) in cases {
            let app = app();
            let (status, response) = send(
                app.clone(),
                post_json(
                    "/api/forms/save",
                    &json!({"userId": 1, "title": "Survey", "fields": fields}),
                ),
            )
            .await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{fields}");
            assert_eq!(
                response,
                json!({"error": SAVE_FIELDS_REQUIRED, "message": message})
            );

            let (_, listed) = send(app, get("/api/user/1")).await;
            assert_eq!(listed, json!({"forms": []}));
        }
    }

    #[tokio::test]
    async fn saved_fields_are_normalised() {
        let app = app();
        let fields = json!([
            {"label": "Agree", "name": "agree", "type": "checkbox", "required": "yes",
             "options": [1, true]}
        ]);

        let (status, _) = send(
            app.clone(),
            post_json(
                "/api/forms/save",
                &json!({"userId": "u9", "title": "Terms", "fields": fields}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, listed) = send(app, get("/api/user/u9")).await;
        assert_eq!(listed["forms"][0]["fields"][0]["required"], true);
        assert_eq!(listed["forms"][0]["fields"][0]["options"], json!(["1", "true"]));
        assert_eq!(listed["forms"][0]["fields"][0]["placeholder"], "");
    }

    #[tokio::test]
    async fn unknown_users_have_no_forms() {
        let (status, body) = send(app(), get("/api/user/nobody")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"forms": []}));
    }
}
