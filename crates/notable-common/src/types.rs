use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted note. `title` and `content` are nullable at the schema level;
/// the create endpoint requires both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i32,
    pub title: Option<String>,
    pub content: Option<String>,
    pub created_on: DateTime<Utc>,
    pub user_id: Option<i32>,
}

/// A persisted account. `password_hash` is a bcrypt digest; the plaintext
/// password is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
}

/// Render a timestamp the way the API exposes `created_on`:
/// `YYYY-MM-DD HH:MM:SS`, always UTC.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use notable_common::types::format_timestamp;
///
/// let ts = Utc.with_ymd_and_hms(2024, 3, 9, 17, 5, 30).unwrap();
/// assert_eq!(format_timestamp(&ts), "2024-03-09 17:05:30");
/// ```
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// 创建笔记请求体
///
/// `title` 与 `content` 在类型上是可选的，以便在处理器中返回统一的
/// 校验错误；缺失任一字段会被拒绝。
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub user_id: Option<i32>,
}

/// 更新笔记请求体（部分更新：缺失的字段保持不变）
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// 注册请求体
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// 登录请求体
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// The fields an update actually changes, expressed separately from the wire
/// type so the storage layer does not depend on request parsing rules.
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NotePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

impl From<UpdateNoteRequest> for NotePatch {
    fn from(req: UpdateNoteRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
        }
    }
}
