//! 应用状态管理
//!
//! 定义在请求处理器之间共享的状态。

use std::sync::Arc;

use crate::config::AppConfig;
use crate::llm::{LlmClient, LlmError};
use crate::services::SolutionService;

/// 应用共享状态
///
/// 启动时构建一次，之后只读，使用 Arc 包裹以便在多个处理器之间共享
pub struct AppState {
    pub solution_service: SolutionService,
}

impl AppState {
    /// 根据配置创建应用状态
    pub fn new(config: &AppConfig) -> Result<Self, LlmError> {
        let client = Arc::new(LlmClient::new(&config.api_key, &config.base_url)?);
        Ok(Self {
            solution_service: SolutionService::new(client, config),
        })
    }
}

/// 创建可共享的应用状态
pub fn create_shared_state(config: &AppConfig) -> Result<Arc<AppState>, LlmError> {
    Ok(Arc::new(AppState::new(config)?))
}
