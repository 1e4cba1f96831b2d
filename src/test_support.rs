//! 测试辅助：进程内的补全 API 模拟服务

use axum::{
    body::Body, extract::State, http::StatusCode, response::Response, routing::post, Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use crate::api::create_app;
use crate::config::AppConfig;
use crate::state::create_shared_state;

/// 模拟服务的固定应答
#[derive(Clone)]
pub struct MockCompletion {
    status: StatusCode,
    body: Value,
}

impl MockCompletion {
    pub fn ok(content: &str) -> Self {
        Self {
            status: StatusCode::OK,
            body: json!({
                "id": "chatcmpl-test",
                "object": "chat.completion",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": content},
                    "finish_reason": "stop"
                }]
            }),
        }
    }

    pub fn error(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }
}

#[derive(Clone)]
struct MockState {
    reply: MockCompletion,
    requests: Arc<Mutex<Vec<Value>>>,
}

pub struct MockServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl MockServer {
    /// 已收到的请求体
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

async fn mock_completions(
    State(state): State<MockState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.requests.lock().unwrap().push(body);
    (state.reply.status, Json(state.reply.body.clone()))
}

/// 在随机端口启动模拟服务
pub async fn spawn_mock_completion(reply: MockCompletion) -> MockServer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        reply,
        requests: Arc::clone(&requests),
    };
    let router = Router::new()
        .route("/v1/chat/completions", post(mock_completions))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    MockServer {
        base_url: format!("http://{}", addr),
        requests,
    }
}

/// 指向模拟服务的完整应用
pub fn test_app(base_url: &str, api_key: &str) -> Router {
    let config = AppConfig {
        api_key: api_key.to_string(),
        base_url: base_url.to_string(),
        ..Default::default()
    };
    let state = create_shared_state(&config).unwrap();
    create_app(state, config.max_upload_bytes)
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
