//! API 路由模块

mod diagnostics;
mod homework;

pub use diagnostics::diagnostics_routes;
pub use homework::homework_routes;

use axum::{extract::DefaultBodyLimit, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// 创建所有 API 路由
pub fn create_api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(homework_routes())
        .merge(diagnostics_routes())
        .with_state(state)
}

/// 创建完整应用：路由 + CORS + 请求追踪 + 上传大小限制
pub fn create_app(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    // 所有 /api/* 路由允许任意来源
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_api_routes(state)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
