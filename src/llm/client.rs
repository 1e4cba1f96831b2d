//! 补全 API 客户端

use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{error, info};
use uuid::Uuid;

use super::format::{build_openai_endpoint, mask_api_key, preview};
use super::openai::complete_openai;
use super::types::{ChatMessage, ChatOptions, LlmError};

/// 补全 API 客户端
///
/// 进程启动时创建一次，通过 `Arc` 在所有请求处理器之间只读共享。
/// 底层 `reqwest::Client` 自带连接池，可安全并发使用。
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LlmClient {
    /// 创建新的客户端
    ///
    /// API 密钥为空时仍然可以创建，之后每次调用都会返回配置错误。
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .connect_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(5)
            .build()
            .map_err(LlmError::HttpError)?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    /// 是否已配置 API 密钥
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// 发送一次补全请求
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        model: &str,
        options: &ChatOptions,
    ) -> Result<String, LlmError> {
        if !self.has_api_key() {
            return Err(LlmError::ConfigError("OPENAI_API_KEY is not set".to_string()));
        }

        let request_id = Uuid::new_v4().to_string()[..8].to_string();
        let start = Instant::now();
        info!(
            request_id = %request_id,
            endpoint = %build_openai_endpoint(&self.base_url),
            model = %model,
            api_key = %mask_api_key(&self.api_key),
            messages = messages.len(),
            "LLM request"
        );

        let result = complete_openai(
            &self.client,
            &self.api_key,
            &self.base_url,
            messages,
            model,
            options,
        )
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(content) => info!(
                request_id = %request_id,
                duration_ms,
                response_length = content.len(),
                "LLM response: {}",
                preview(content, 200)
            ),
            Err(e) => error!(
                request_id = %request_id,
                duration_ms,
                "LLM request failed: {}",
                e
            ),
        }

        result
    }
}
