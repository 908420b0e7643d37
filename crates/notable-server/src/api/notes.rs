use crate::api::{error_response, message_response, ErrorBody, MessageBody};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use notable_common::types::{
    format_timestamp, CreateNoteRequest, Note, NotePatch, UpdateNoteRequest,
};
use serde::Serialize;
use utoipa::ToSchema;
use utoipa_axum::{router::OpenApiRouter, routes};

/// 笔记响应体；`created_on` 统一格式化为 `YYYY-MM-DD HH:MM:SS`（UTC）
#[derive(Serialize, ToSchema)]
pub struct NoteBody {
    /// 笔记 ID
    pub id: i32,
    /// 标题
    pub title: Option<String>,
    /// 正文
    pub content: Option<String>,
    /// 创建时间（UTC，服务端生成，创建后不可变）
    pub created_on: String,
    /// 所属用户 ID（可为空）
    pub user_id: Option<i32>,
}

impl From<Note> for NoteBody {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            created_on: format_timestamp(&note.created_on),
            user_id: note.user_id,
        }
    }
}

/// 笔记列表响应体
#[derive(Serialize, ToSchema)]
pub struct NoteListBody {
    /// 按插入顺序排列的全部笔记
    pub notes: Vec<NoteBody>,
}

/// 创建成功响应体（返回新笔记的 ID，客户端无需重新拉取列表）
#[derive(Serialize, ToSchema)]
pub struct NoteCreatedBody {
    /// 结果描述
    pub message: String,
    /// 新建笔记的 ID
    pub id: i32,
}

fn note_not_found(id: i32) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        &format!("Note with ID {id} doesn't exist"),
    )
}

fn database_error() -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
}

/// 获取全部笔记。
#[utoipa::path(
    get,
    path = "/notes",
    tag = "Notes",
    responses(
        (status = 200, description = "笔记列表（可能为空）", body = NoteListBody)
    )
)]
async fn list_notes(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.list_notes().await {
        Ok(notes) => Json(NoteListBody {
            notes: notes.into_iter().map(NoteBody::from).collect(),
        })
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list notes");
            database_error()
        }
    }
}

/// 创建新笔记。`title` 与 `content` 为必填；`user_id` 可选。
#[utoipa::path(
    post,
    path = "/notes",
    tag = "Notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 200, description = "创建成功，返回新笔记 ID", body = NoteCreatedBody),
        (status = 400, description = "缺少 title 或 content", body = ErrorBody)
    )
)]
async fn create_note(
    State(state): State<AppState>,
    Json(req): Json<CreateNoteRequest>,
) -> impl IntoResponse {
    let (title, content) = match (req.title.as_deref(), req.content.as_deref()) {
        (Some(title), Some(content)) if !title.is_empty() && !content.is_empty() => {
            (title, content)
        }
        _ => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Insufficient data to create note",
            );
        }
    };

    match state.store.create_note(title, content, req.user_id).await {
        Ok(note) => Json(NoteCreatedBody {
            message: "The note was created successfully".to_string(),
            id: note.id,
        })
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create note");
            database_error()
        }
    }
}

/// 获取单条笔记。
#[utoipa::path(
    get,
    path = "/notes/{id}",
    tag = "Notes",
    params(("id" = i32, Path, description = "笔记 ID")),
    responses(
        (status = 200, description = "笔记详情", body = NoteBody),
        (status = 404, description = "笔记不存在", body = ErrorBody)
    )
)]
async fn get_note(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.store.get_note(id).await {
        Ok(Some(note)) => Json(NoteBody::from(note)).into_response(),
        Ok(None) => note_not_found(id),
        Err(e) => {
            tracing::error!(error = %e, id, "Failed to get note");
            database_error()
        }
    }
}

/// 部分更新笔记：仅请求体中出现的字段会被修改，`created_on` 与
/// `user_id` 保持不变。
#[utoipa::path(
    put,
    path = "/notes/{id}",
    tag = "Notes",
    params(("id" = i32, Path, description = "笔记 ID")),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "更新成功", body = MessageBody),
        (status = 404, description = "笔记不存在", body = ErrorBody)
    )
)]
async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateNoteRequest>,
) -> impl IntoResponse {
    let patch = NotePatch::from(req);
    match state.store.update_note(id, &patch).await {
        Ok(Some(_)) => message_response(StatusCode::OK, "Note updated successfully"),
        Ok(None) => note_not_found(id),
        Err(e) => {
            tracing::error!(error = %e, id, "Failed to update note");
            database_error()
        }
    }
}

/// 删除笔记。
#[utoipa::path(
    delete,
    path = "/notes/{id}",
    tag = "Notes",
    params(("id" = i32, Path, description = "笔记 ID")),
    responses(
        (status = 200, description = "删除成功", body = MessageBody),
        (status = 404, description = "笔记不存在", body = ErrorBody)
    )
)]
async fn delete_note(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.store.delete_note(id).await {
        Ok(true) => message_response(StatusCode::OK, "Note deleted successfully"),
        Ok(false) => note_not_found(id),
        Err(e) => {
            tracing::error!(error = %e, id, "Failed to delete note");
            database_error()
        }
    }
}

pub fn note_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_notes, create_note))
        .routes(routes!(get_note, update_note, delete_note))
}
