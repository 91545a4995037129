//! 配置服务

use std::path::{Path, PathBuf};
use std::time::Duration;

use agentcraft_client::{ClientConfig, DEFAULT_BASE_URL};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::state::Theme;

/// 配置目录名（位于系统配置目录下）
pub const APP_DIR: &str = "agentcraft-console";
const CONFIG_FILE: &str = "config.json";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 控制台配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsoleConfig {
    /// 后端 API 地址，资源路径拼接在其后
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// BCP 47 语言代码
    pub language: String,
    pub theme: Theme,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            language: "en-US".to_string(),
            theme: Theme::Dark,
        }
    }
}

impl ConsoleConfig {
    /// Connection settings for the resource clients.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_base_url.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..ClientConfig::default()
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置，文件不存在时返回默认配置
    fn load(&self) -> Result<ConsoleConfig>;

    /// 保存配置
    fn save(&self, config: &ConsoleConfig) -> Result<()>;
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<系统配置目录>/agentcraft-console`
    pub fn default_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .context("cannot determine the user config directory")
    }

    /// 默认位置的配置文件
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(CONFIG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<ConsoleConfig> {
        if !self.path.exists() {
            log::info!("No config at {}, using defaults", self.path.display());
            return Ok(ConsoleConfig::default());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", self.path.display()))
    }

    fn save(&self, config: &ConsoleConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        log::info!("Config saved to {}", self.path.display());
        Ok(())
    }
}
