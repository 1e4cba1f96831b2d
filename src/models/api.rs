//! REST API 响应模型

use serde::Serialize;

/// 作业提交成功响应
#[derive(Debug, Serialize)]
pub struct HomeworkResponse {
    pub message: String,
    pub text: String,
    pub subject: String,
    pub solution: String,
    /// 原样回显请求中的语言代码（即使模板回退到了英语）
    pub language: String,
}

/// 连通性测试响应
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_test: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_error: Option<String>,
}

impl DiagnosticsResponse {
    const RUNNING: &'static str = "Backend is running";

    pub fn success(solution: String) -> Self {
        Self {
            status: Self::RUNNING.to_string(),
            openai_test: Some("OpenAI connection successful".to_string()),
            test_response: Some(solution),
            openai_error: None,
        }
    }

    pub fn failure(error: String) -> Self {
        Self {
            status: Self::RUNNING.to_string(),
            openai_test: None,
            test_response: None,
            openai_error: Some(error),
        }
    }
}
