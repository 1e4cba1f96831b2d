//! LLM 模块
//!
//! 提供 OpenAI 兼容的 Chat Completions 客户端。

mod client;
mod format;
mod openai;
mod types;

pub use client::LlmClient;
pub use format::preview;
pub use types::*;
