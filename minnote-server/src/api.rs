//! Router and request handlers.
//!
//! Every handler translates one HTTP call into one [`NoteStore`] operation
//! and maps the result through [`ApiError`]. The wire contract matches the
//! persisted layout: notes travel as `{"name": ..., "text": ...}` objects.

use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json};
use axum::routing::{get, post};
use axum::Router;
use minnote_core::NoteStore;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ApiError;

/// The create-note form served at `/UploadForm.html`, bundled into the
/// binary so the server has no runtime asset directory.
const UPLOAD_FORM: &str = include_str!("UploadForm.html");

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<NoteStore>,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Minnote API",
        description = "A minimal note service storing named text notes in a single JSON file"
    ),
    paths(get_note, update_note, delete_note, list_notes, create_note, upload_form, health_check),
    tags(
        (name = "Notes", description = "Note CRUD operations"),
        (name = "System", description = "Health check and auxiliary pages")
    )
)]
struct ApiDoc;

/// Builds the application router around a shared store.
pub fn router(store: Arc<NoteStore>) -> Router {
    let state = AppState { store };

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health_check))
        .route("/notes", get(list_notes))
        .route(
            "/notes/:name",
            get(get_note).put(update_note).delete(delete_note),
        )
        .route("/write", post(create_note))
        .route("/UploadForm.html", get(upload_form))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[utoipa::path(get, path = "/notes/{name}", tag = "Notes",
    params(("name" = String, Path, description = "Note name")),
    responses(
        (status = 200, description = "Note text", body = String),
        (status = 404, description = "No note with this name")))]
async fn get_note(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<String, ApiError> {
    Ok(state.store.get(&name).await?)
}

#[utoipa::path(put, path = "/notes/{name}", tag = "Notes",
    params(("name" = String, Path, description = "Note name")),
    request_body(content = String, content_type = "text/plain", description = "Replacement text"),
    responses(
        (status = 200, description = "Text replaced"),
        (status = 404, description = "No note with this name")))]
async fn update_note(
    State(state): State<AppState>,
    Path(name): Path<String>,
    text: String,
) -> Result<StatusCode, ApiError> {
    state.store.update(&name, &text).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(delete, path = "/notes/{name}", tag = "Notes",
    params(("name" = String, Path, description = "Note name")),
    responses(
        (status = 200, description = "Note removed"),
        (status = 404, description = "No note with this name")))]
async fn delete_note(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(&name).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(get, path = "/notes", tag = "Notes",
    responses((status = 200, description = "All notes in creation order")))]
async fn list_notes(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.list().await)
}

/// Creates a note from the upload form's `multipart/form-data` fields
/// `note_name` and `note`. A missing `note` field means empty text; a
/// missing or empty `note_name` is rejected before touching the store.
#[utoipa::path(post, path = "/write", tag = "Notes",
    responses(
        (status = 201, description = "Note created"),
        (status = 400, description = "Missing or empty note_name, or malformed form data"),
        (status = 409, description = "A note with this name already exists")))]
async fn create_note(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<StatusCode, ApiError> {
    let mut name: Option<String> = None;
    let mut text = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Multipart error: {e}")))?
    {
        let field_name = field.name().map(|n| n.to_string());
        let value = field
            .text()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Read error: {e}")))?;
        match field_name.as_deref() {
            Some("note_name") => name = Some(value),
            Some("note") => text = value,
            _ => {} // ignore unknown fields
        }
    }

    let name = name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing or empty note_name".to_string()))?;

    state.store.create(&name, &text).await?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(get, path = "/UploadForm.html", tag = "System",
    responses((status = 200, description = "HTML form for creating a note")))]
async fn upload_form() -> Html<&'static str> {
    Html(UPLOAD_FORM)
}

#[utoipa::path(get, path = "/health", tag = "System",
    responses((status = 200, description = "Service is up")))]
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "notes": state.store.note_count().await,
    }))
}
