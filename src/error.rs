//! 统一错误处理模块
//!
//! 定义接口层错误类型，并实现 axum 的 IntoResponse trait，
//! 以便自动转换为 HTTP 响应。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::services::{ExtractionError, SolutionError};

/// 应用错误枚举
#[derive(Error, Debug)]
pub enum AppError {
    /// 请求参数错误（文件类型不支持、没有可用文本）
    #[error("{0}")]
    BadRequest(String),

    /// PDF 解析失败
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// 解题失败
    #[error(transparent)]
    Solution(#[from] SolutionError),

    /// 内部错误
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Extraction(_) | AppError::Solution(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match &self {
            AppError::BadRequest(msg) => msg.clone(),
            other => {
                let msg = format!("Error processing request: {}", other);
                error!("{}", msg);
                msg
            }
        };

        (status, Json(json!({ "error": error_message }))).into_response()
    }
}

/// 便捷类型别名
pub type AppResult<T> = Result<T, AppError>;
