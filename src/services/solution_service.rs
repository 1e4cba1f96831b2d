//! 解题服务
//!
//! 组合提示词构建与补全客户端，产出逐步解答。

use std::sync::Arc;
use tracing::{error, info};

use super::prompt_service::{build_prompt, Language};
use crate::config::AppConfig;
use crate::llm::{ChatOptions, LlmClient};

/// 空题目时返回的引导语
pub const EMPTY_QUESTION_REPLY: &str = "Please provide a question to get a solution.";

/// API 密钥缺失或无效时的固定提示
pub const API_KEY_ERROR_MESSAGE: &str =
    "OpenAI API key is invalid or not set. Please check your .env file.";

/// 解题错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolutionError {
    /// API 密钥缺失或无效
    #[error("{}", API_KEY_ERROR_MESSAGE)]
    Configuration,

    /// 其他上游错误
    #[error("{0}")]
    Upstream(String),
}

impl SolutionError {
    /// 将上游失败信息归类，包含 "api_key"（不区分大小写）即视为配置错误
    pub fn classify(message: &str) -> Self {
        if message.to_lowercase().contains("api_key") {
            SolutionError::Configuration
        } else {
            SolutionError::Upstream(message.to_string())
        }
    }
}

/// 解题服务
#[derive(Clone)]
pub struct SolutionService {
    client: Arc<LlmClient>,
    model: String,
    temperature: f64,
    max_tokens: u32,
}

impl SolutionService {
    pub fn new(client: Arc<LlmClient>, config: &AppConfig) -> Self {
        Self {
            client,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// 获取题目解答
    ///
    /// 题目为空时直接返回引导语，不调用补全 API。
    pub async fn get_solution(
        &self,
        text: &str,
        subject: &str,
        language_code: &str,
        is_file: bool,
    ) -> Result<String, SolutionError> {
        if text.trim().is_empty() {
            return Ok(EMPTY_QUESTION_REPLY.to_string());
        }

        let messages = build_prompt(text, subject, language_code, is_file).into_messages();
        let options = ChatOptions {
            temperature: Some(self.temperature),
            max_tokens: Some(self.max_tokens),
        };

        info!(
            "Sending request with prompt in {} (template: {})",
            language_code,
            Language::from_code(language_code).code()
        );

        self.client
            .complete(&messages, &self.model, &options)
            .await
            .map_err(|e| {
                let message = e.to_string();
                error!("Completion API error: {}", message);
                SolutionError::classify(&message)
            })
    }
}
