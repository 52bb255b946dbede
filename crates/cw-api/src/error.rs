//! エラー型定義 (cw-api)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// cw-api のエラー型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Core error: {0}")]
    Core(#[from] cw_core::Error),

    #[error("Calendar error: {0}")]
    Calendar(#[from] cw_calendar::CalendarError),

    #[error("Task error: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;

/// 失敗の詳細はログにのみ出し、クライアントには汎用の 500 を返す
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
