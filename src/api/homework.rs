//! 作业提交端点

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    http::HeaderMap,
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::HomeworkResponse;
use crate::services::extract_pdf_text;
use crate::state::AppState;

/// 上传的文件
struct UploadedFile {
    filename: String,
    data: Bytes,
}

/// 一次作业提交（仅在单个请求内存在）
struct Submission {
    text: String,
    subject: String,
    language: String,
    file: Option<UploadedFile>,
}

/// 读取表单字段与可选文件
async fn read_submission(mut multipart: Multipart) -> AppResult<Submission> {
    let mut submission = Submission {
        text: String::new(),
        subject: String::new(),
        language: "en".to_string(),
        file: None,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Internal(format!("Failed to read form data: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Internal(format!("Failed to read file: {}", e)))?;
                if filename.is_empty() {
                    continue;
                }
                // 多个文件字段时只取第一个
                if submission.file.is_none() {
                    submission.file = Some(UploadedFile { filename, data });
                } else {
                    debug!("Ignoring extra file part: {}", filename);
                }
            }
            "text" | "subject" | "language" => {
                let value = field.text().await.map_err(|e| {
                    AppError::Internal(format!("Failed to read field {}: {}", name, e))
                })?;
                match name.as_str() {
                    "text" => submission.text = value.trim().to_string(),
                    "subject" => submission.subject = value,
                    _ => submission.language = value,
                }
            }
            other => debug!("Ignoring unknown form field: {}", other),
        }
    }

    Ok(submission)
}

/// 根据上传文件确定题目文本
///
/// 文件缓冲区在此处被消费，提取完成后即释放。
async fn resolve_text(text: String, file: Option<UploadedFile>) -> AppResult<String> {
    let Some(UploadedFile { filename, data }) = file else {
        return Ok(text);
    };

    info!("Processing file: {} ({} bytes)", filename, data.len());

    if filename.ends_with(".pdf") {
        let text = tokio::task::spawn_blocking(move || extract_pdf_text(&data))
            .await
            .map_err(|e| AppError::Internal(format!("PDF extraction task failed: {}", e)))??;
        Ok(text)
    } else if filename.ends_with(".txt") {
        String::from_utf8(data.to_vec()).map_err(|e| {
            AppError::Internal(format!("Failed to decode text file as UTF-8: {}", e))
        })
    } else {
        Err(AppError::BadRequest(
            "Unsupported file type. Please upload a PDF or TXT file.".to_string(),
        ))
    }
}

/// 日志中隐藏的请求头
const REDACTED_HEADERS: [&str; 3] = ["authorization", "cookie", "proxy-authorization"];

/// 请求头的日志表示，敏感值被替换
fn loggable_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let value = if REDACTED_HEADERS.contains(&name.as_str()) {
                "<redacted>".to_string()
            } else {
                String::from_utf8_lossy(value.as_bytes()).into_owned()
            };
            (name.as_str().to_string(), value)
        })
        .collect()
}

/// 提交作业并获取解答
async fn submit_homework(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    multipart: Multipart,
) -> AppResult<Json<HomeworkResponse>> {
    info!("Received new homework submission");
    debug!("Headers: {:?}", loggable_headers(&headers));

    let Submission {
        text,
        subject,
        language,
        file,
    } = read_submission(multipart).await?;

    let is_file = file.is_some();
    debug!(
        "Processing - text: {:?}, subject: {}, language: {}, file: {}",
        text, subject, language, is_file
    );

    let text = resolve_text(text, file).await?;
    if text.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Please provide either text or a file with readable content".to_string(),
        ));
    }

    let solution = state
        .solution_service
        .get_solution(&text, &subject, &language, is_file)
        .await?;

    info!("Homework solved: subject={}, language={}", subject, language);

    Ok(Json(HomeworkResponse {
        message: "Homework received successfully".to_string(),
        text,
        subject,
        solution,
        language,
    }))
}

/// 创建作业路由
pub fn homework_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/homework", post(submit_homework))
}
