//! LLM 类型定义

use serde::Serialize;

/// 聊天消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    /// 角色：system, user, assistant
    pub role: String,
    /// 消息内容
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// 聊天选项
#[derive(Debug, Clone, Default)]
pub struct ChatOptions {
    /// 温度参数
    pub temperature: Option<f64>,
    /// 最大 token 数
    pub max_tokens: Option<u32>,
}

/// LLM 错误类型
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// HTTP 请求错误
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API 返回错误
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// 配置错误
    #[error("{0}")]
    ConfigError(String),

    /// JSON 解析错误
    #[error("Failed to parse response: {0}")]
    JsonError(#[from] serde_json::Error),

    /// 响应中没有可用的补全内容
    #[error("Completion response contained no content")]
    EmptyResponse,
}
