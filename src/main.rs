//! Homework Helper - Rust Backend
//!
//! 使用 axum 框架构建的后端服务：接收作业题目（文本、PDF 或 TXT 文件），
//! 通过补全 API 生成逐步解答并以 JSON 返回。

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod error;
mod llm;
mod models;
mod services;
mod state;
#[cfg(test)]
mod test_support;

use api::create_app;
use config::AppConfig;
use state::create_shared_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_relay=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Homework Helper backend...");

    let config = AppConfig::load();
    if config.api_key.is_empty() {
        warn!("OPENAI_API_KEY not found in environment variables");
    } else {
        info!("OpenAI API key found");
    }

    // 补全客户端只创建一次，所有请求共享
    let state = create_shared_state(&config)?;
    let app = create_app(state, config.max_upload_bytes);

    let addr = config.socket_addr()?;
    info!("Server listening on: {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
