//! 连通性测试端点

use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;
use tracing::warn;

use crate::models::DiagnosticsResponse;
use crate::state::AppState;

/// 用固定题目调用一次补全 API
///
/// 无论成功与否都返回 200，错误信息放在响应体中。
async fn connectivity_test(State(state): State<Arc<AppState>>) -> Json<DiagnosticsResponse> {
    match state
        .solution_service
        .get_solution("What is 2+2?", "math", "en", false)
        .await
    {
        Ok(solution) => Json(DiagnosticsResponse::success(solution)),
        Err(e) => {
            warn!("Connectivity test failed: {}", e);
            Json(DiagnosticsResponse::failure(e.to_string()))
        }
    }
}

/// 创建连通性测试路由
pub fn diagnostics_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/test", get(connectivity_test))
}
