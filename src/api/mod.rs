use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query};
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{post, put};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::AppError;
use crate::models::*;
use crate::state::AppState;
use crate::store::{PageSnapshot, PageStats, PageStore};

#[derive(Deserialize)]
struct LessonQueryParams {
    date: Option<NaiveDate>,
}

#[derive(Serialize)]
struct ClearedResponse {
    removed: usize,
}

#[derive(Serialize)]
struct UploadsResponse {
    files: Vec<String>,
    drag_active: bool,
    accept: &'static str,
}

#[derive(Serialize)]
struct NotificationSettingsResponse {
    lines: Vec<&'static str>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/page", get(page))
        .route("/tab", put(select_tab))
        .route("/dialogs/{dialog}/open", post(open_dialog))
        .route("/dialogs/{dialog}/close", post(close_dialog))
        .route("/draft", get(get_draft).patch(update_draft))
        .route("/draft/cancel", post(cancel_draft))
        .route("/lessons", get(list_lessons).post(add_lesson).delete(clear_lessons))
        .route("/lessons/today", get(today_lessons))
        .route("/stats", get(stats))
        .route("/export", get(export_schedule))
        .route("/uploads", get(list_uploads))
        .route("/uploads/drag", post(drag))
        .route("/uploads/drop", post(drop_files))
        .route("/uploads/pick", post(pick_files))
        .route("/settings/notifications", get(notification_settings))
        .route("/settings/email", get(get_email_settings).patch(update_email_settings))
        .route("/settings/email/save", post(save_email_settings))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn page(State(state): State<AppState>) -> Json<PageSnapshot> {
    let today = state.clock.today();
    let store = state.store.lock().await;
    Json(store.snapshot(today))
}

async fn select_tab(
    State(state): State<AppState>,
    payload: Result<Json<SelectTabRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(req) = payload?;
    state.store.lock().await.select_tab(req.tab);
    Ok(StatusCode::NO_CONTENT)
}

fn dialog_from_path(path: Result<Path<Dialog>, PathRejection>) -> Result<Dialog, AppError> {
    path.map(|Path(dialog)| dialog).map_err(|_| AppError::NotFound)
}

async fn open_dialog(
    State(state): State<AppState>,
    dialog: Result<Path<Dialog>, PathRejection>,
) -> Result<Json<DialogFlags>, AppError> {
    let dialog = dialog_from_path(dialog)?;
    let mut store = state.store.lock().await;
    store.open_dialog(dialog);
    debug!("dialog opened: {:?}", dialog);
    Ok(Json(store.dialogs()))
}

async fn close_dialog(
    State(state): State<AppState>,
    dialog: Result<Path<Dialog>, PathRejection>,
) -> Result<Json<DialogFlags>, AppError> {
    let dialog = dialog_from_path(dialog)?;
    let mut store = state.store.lock().await;
    store.close_dialog(dialog);
    debug!("dialog closed: {:?}", dialog);
    Ok(Json(store.dialogs()))
}

async fn get_draft(State(state): State<AppState>) -> Json<NewLessonDraft> {
    Json(state.store.lock().await.draft().clone())
}

async fn update_draft(
    State(state): State<AppState>,
    payload: Result<Json<DraftPatch>, JsonRejection>,
) -> Result<Json<NewLessonDraft>, AppError> {
    let Json(req) = payload?;
    let mut store = state.store.lock().await;
    store.update_draft(req);
    Ok(Json(store.draft().clone()))
}

async fn cancel_draft(State(state): State<AppState>) -> StatusCode {
    state.store.lock().await.cancel_draft();
    StatusCode::NO_CONTENT
}

async fn list_lessons(
    State(state): State<AppState>,
    Query(params): Query<LessonQueryParams>,
) -> Json<Vec<Lesson>> {
    let store = state.store.lock().await;
    let lessons = match params.date {
        Some(date) => store.lessons_on(date),
        None => store.lessons().to_vec(),
    };
    Json(lessons)
}

async fn add_lesson(State(state): State<AppState>) -> Result<(StatusCode, Json<Lesson>), AppError> {
    let lesson = state.store.lock().await.add_lesson()?;
    Ok((StatusCode::CREATED, Json(lesson)))
}

async fn clear_lessons(State(state): State<AppState>) -> Json<ClearedResponse> {
    let removed = state.store.lock().await.clear_all();
    Json(ClearedResponse { removed })
}

async fn today_lessons(State(state): State<AppState>) -> Json<Vec<Lesson>> {
    let today = state.clock.today();
    Json(state.store.lock().await.lessons_on(today))
}

async fn stats(State(state): State<AppState>) -> Json<PageStats> {
    let today = state.clock.today();
    Json(state.store.lock().await.stats(today))
}

async fn export_schedule(State(state): State<AppState>) -> Result<Response, AppError> {
    let artifact = state.store.lock().await.export_schedule()?;
    let disposition = HeaderValue::from_str(&artifact.content_disposition())
        .map_err(|_| AppError::InternalServerError)?;
    info!("schedule exported as {}", artifact.file_name);

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(artifact.content_type())),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        artifact.body,
    )
        .into_response())
}

fn uploads_view(store: &PageStore) -> UploadsResponse {
    UploadsResponse {
        files: store.uploaded_files(),
        drag_active: store.drag_active(),
        accept: ACCEPTED_EXTENSIONS,
    }
}

async fn list_uploads(State(state): State<AppState>) -> Json<UploadsResponse> {
    let store = state.store.lock().await;
    Json(uploads_view(&store))
}

async fn drag(
    State(state): State<AppState>,
    payload: Result<Json<DragRequest>, JsonRejection>,
) -> Result<Json<UploadsResponse>, AppError> {
    let Json(req) = payload?;
    let mut store = state.store.lock().await;
    store.handle_drag(req.event);
    Ok(Json(uploads_view(&store)))
}

async fn drop_files(
    State(state): State<AppState>,
    payload: Result<Json<FileListRequest>, JsonRejection>,
) -> Result<Json<UploadsResponse>, AppError> {
    let Json(req) = payload?;
    let mut store = state.store.lock().await;
    store.drop_files(req.files);
    Ok(Json(uploads_view(&store)))
}

async fn pick_files(
    State(state): State<AppState>,
    payload: Result<Json<FileListRequest>, JsonRejection>,
) -> Result<Json<UploadsResponse>, AppError> {
    let Json(req) = payload?;
    let mut store = state.store.lock().await;
    store.pick_files(req.files);
    Ok(Json(uploads_view(&store)))
}

async fn notification_settings() -> Json<NotificationSettingsResponse> {
    Json(NotificationSettingsResponse {
        lines: NOTIFICATION_SETTINGS.to_vec(),
    })
}

async fn get_email_settings(State(state): State<AppState>) -> Json<EmailSettingsForm> {
    Json(state.store.lock().await.email_form().clone())
}

async fn update_email_settings(
    State(state): State<AppState>,
    payload: Result<Json<EmailSettingsPatch>, JsonRejection>,
) -> Result<Json<EmailSettingsForm>, AppError> {
    let Json(req) = payload?;
    let mut store = state.store.lock().await;
    store.update_email_form(req);
    Ok(Json(store.email_form().clone()))
}

async fn save_email_settings(State(state): State<AppState>) -> Json<DialogFlags> {
    let mut store = state.store.lock().await;
    store.save_email_settings();
    Json(store.dialogs())
}
