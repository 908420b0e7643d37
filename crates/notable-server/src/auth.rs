use crate::api::{message_response, MessageBody};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{extract::State, Json};
use notable_common::types::{LoginRequest, RegisterRequest};
use notable_storage::auth::{hash_password, verify_password};
use notable_storage::StorageError;
use utoipa_axum::{router::OpenApiRouter, routes};

/// Uniform failure body for both unknown-username and wrong-password logins,
/// so responses cannot be used to enumerate usernames.
fn invalid_credentials() -> Response {
    message_response(StatusCode::UNAUTHORIZED, "Invalid username or password")
}

fn internal_error() -> Response {
    message_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

/// Missing and empty fields are rejected alike, with a per-field message.
fn require_field<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, Response> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(message_response(
            StatusCode::BAD_REQUEST,
            &format!("{name} is required"),
        )),
    }
}

/// 注册新用户。密码以 bcrypt 加盐哈希存储，明文不落库、不记日志。
#[utoipa::path(
    post,
    path = "/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "注册成功", body = MessageBody),
        (status = 400, description = "字段缺失或用户名已存在", body = MessageBody)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> impl IntoResponse {
    let username = match require_field(req.username.as_deref(), "username") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let password = match require_field(req.password.as_deref(), "password") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let password_hash = match hash_password(password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!(error = %e, "Failed to hash password");
            return internal_error();
        }
    };

    match state.store.create_user(username, &password_hash).await {
        Ok(user) => {
            tracing::info!(username = %user.username, "User registered");
            message_response(StatusCode::CREATED, "User registered successfully")
        }
        Err(StorageError::Conflict { .. }) => message_response(
            StatusCode::BAD_REQUEST,
            "User with this username already exists",
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create user");
            internal_error()
        }
    }
}

/// 登录校验。未知用户名、错误密码以及缺失字段一律返回完全相同的
/// 401 响应，避免用户名枚举。
#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "登录成功", body = MessageBody),
        (status = 401, description = "用户名或密码错误", body = MessageBody)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    // A missing field can never match a stored credential, so it takes the
    // same uniform 401 path as a wrong password.
    let username = req.username.as_deref().unwrap_or_default();
    let password = req.password.as_deref().unwrap_or_default();

    let user = match state.store.get_user_by_username(username).await {
        Ok(Some(user)) => user,
        Ok(None) => return invalid_credentials(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to query user");
            return internal_error();
        }
    };

    match verify_password(password, &user.password_hash) {
        Ok(true) => message_response(StatusCode::OK, "Login successfully"),
        _ => invalid_credentials(),
    }
}

pub fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(register))
        .routes(routes!(login))
}
