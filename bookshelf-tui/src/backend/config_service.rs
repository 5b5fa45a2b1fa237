//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use bookshelf_client::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 覆盖 API 地址的环境变量
pub const API_URL_ENV: &str = "BOOKSHELF_API_URL";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    /// 请求超时（秒），未设置则不限时
    pub request_timeout_secs: Option<u64>,
    pub theme: Theme,
    pub language: Language,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
            theme: Theme::Dark,
            language: Language::EnUs,
        }
    }
}

impl AppConfig {
    /// 用环境变量的值覆盖 API 地址（空白值忽略）
    #[must_use]
    pub fn with_env_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务（JSON 文件）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用平台配置目录：`<config dir>/bookshelf-tui/config.json`
    pub fn new() -> Result<Self> {
        let dir = dirs::config_dir().context("Could not determine the config directory")?;
        Ok(Self::with_path(dir.join("bookshelf-tui").join("config.json")))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 加载配置；首次运行（文件不存在）时写出一份默认文件
    ///
    /// 写出的是文件里的配置本身，环境变量覆盖由调用方在之后叠加，不会落盘。
    pub fn load_or_init(&self) -> Result<AppConfig> {
        let first_run = !self.path.exists();
        let config = self.load()?;
        if first_run {
            if let Err(e) = self.save(&config) {
                log::warn!("Could not write default config: {e:#}");
            }
        }
        Ok(config)
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        // 文件不存在时使用默认配置
        if !self.path.exists() {
            log::debug!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Malformed config file {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}
