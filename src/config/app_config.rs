//! 应用配置管理
//!
//! 配置按以下顺序叠加：默认值 → 可执行文件同级目录的 `config.json` →
//! 工作目录下的 `.env` → 进程环境变量。启动时加载一次，之后只读。

use serde::Deserialize;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use tracing::warn;

/// 获取配置文件路径
fn get_config_path() -> PathBuf {
    // 配置文件位于可执行文件同级目录
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config.json")
}

/// 应用配置结构体
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 补全 API 密钥
    #[serde(default)]
    pub api_key: String,

    /// 补全 API 基础 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// 模型名称
    #[serde(default = "default_model")]
    pub model: String,

    /// 温度参数
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// 最大输出 token 数
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 上传请求体大小上限（字节）
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_upload_bytes() -> usize {
    16 * 1024 * 1024
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl AppConfig {
    /// 加载配置（文件 + .env + 环境变量）
    pub fn load() -> Self {
        let mut config = load_config_from_file(&get_config_path()).unwrap_or_default();

        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                warn!("Failed to load .env file: {}", e);
            }
        }

        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// 使用环境变量覆盖配置
    ///
    /// 通过闭包读取变量，便于测试时注入。无法解析的数值保留原值。
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = var("OPENAI_API_KEY") {
            self.api_key = api_key.trim().to_string();
        }
        if let Some(base_url) = var("OPENAI_BASE_URL") {
            self.base_url = base_url;
        }
        if let Some(model) = var("OPENAI_MODEL") {
            self.model = model;
        }
        if let Some(host) = var("HOST") {
            self.host = host;
        }
        if let Some(port) = var("PORT") {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(_) => warn!("Ignoring invalid PORT value: {}", port),
            }
        }
        if let Some(limit) = var("MAX_UPLOAD_BYTES") {
            match limit.parse() {
                Ok(limit) => self.max_upload_bytes = limit,
                Err(_) => warn!("Ignoring invalid MAX_UPLOAD_BYTES value: {}", limit),
            }
        }
    }

    /// 监听的 socket 地址
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// 从文件加载配置
fn load_config_from_file(path: &Path) -> Option<AppConfig> {
    if !path.exists() {
        return None;
    }
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!("Ignoring malformed config file {}: {}", path.display(), e);
            None
        }
    }
}
