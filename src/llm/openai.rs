//! OpenAI Chat Completions API 实现（非流式）

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::format::build_openai_endpoint;
use super::types::{ChatMessage, ChatOptions, LlmError};

/// OpenAI 请求载荷
#[derive(Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// OpenAI 响应
#[derive(Deserialize, Debug)]
struct OpenAiResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
}

#[derive(Deserialize, Debug)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

#[derive(Deserialize, Debug)]
struct OpenAiMessage {
    content: Option<String>,
}

/// 调用 OpenAI API，返回第一个候选的文本内容
pub async fn complete_openai(
    client: &Client,
    api_key: &str,
    base_url: &str,
    messages: &[ChatMessage],
    model: &str,
    options: &ChatOptions,
) -> Result<String, LlmError> {
    let endpoint = build_openai_endpoint(base_url);

    let payload = OpenAiRequest {
        model,
        messages,
        stream: false,
        temperature: options.temperature,
        max_tokens: options.max_tokens,
    };

    debug!("OpenAI API request: endpoint={}, model={}", endpoint, model);

    let response = client
        .post(&endpoint)
        .header("Authorization", format!("Bearer {}", api_key))
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let status_code = status.as_u16();
        let error_text = response.text().await.unwrap_or_default();
        error!(
            "OpenAI API error: status={}, body={}",
            status_code,
            super::format::preview(&error_text, 500)
        );
        return Err(LlmError::ApiError {
            status: status_code,
            message: error_text,
        });
    }

    let body = response.text().await?;
    let parsed: OpenAiResponse = serde_json::from_str(&body)?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(LlmError::EmptyResponse)
}
