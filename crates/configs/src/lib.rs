use std::io::ErrorKind;

use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

/// Where the configuration blobs live and which key holds the section list.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_settings_key")]
    pub settings_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: default_data_dir(), settings_key: default_settings_key() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Absolute base URL shown in front of link paths, e.g. `https://example.com/`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { base_url: default_base_url() }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 8080 }
fn default_data_dir() -> String { "data".into() }
fn default_settings_key() -> String { "section_titles.settings".into() }
fn default_base_url() -> String { "http://localhost/".into() }

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

/// Load `path`, or defaults when the file does not exist.
/// Unreadable or malformed files are errors.
pub fn load_optional(path: &str) -> Result<AppConfig> {
    match std::fs::read_to_string(path) {
        Ok(content) => load_from_str(&content).map_err(|e| anyhow!("invalid config {path}: {e}")),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(anyhow!("cannot read config {path}: {e}")),
    }
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Like `load_and_validate`, but a missing config file falls back to
    /// defaults. Environment variables are overlaid either way.
    pub fn load_or_env() -> Result<Self> {
        Self::load_or_env_from(&config_path())
    }

    pub fn load_or_env_from(path: &str) -> Result<Self> {
        let mut cfg = load_optional(path)?;
        cfg.apply_env_overrides();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            self.server.worker_threads = Some(w);
        }
        if let Ok(dir) = std::env::var("DATA_DIR") {
            self.storage.data_dir = dir;
        }
        if let Ok(url) = std::env::var("SITE_BASE_URL") {
            self.site.base_url = url;
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.validate()?;
        self.site.normalize()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.trim().is_empty() {
            return Err(anyhow!("storage.data_dir must not be empty"));
        }
        let key = self.settings_key.trim();
        if key.is_empty() {
            return Err(anyhow!("storage.settings_key must not be empty"));
        }
        // 键名直接作为文件名使用
        if key.contains('/') || key.contains('\\') || key.contains("..") {
            return Err(anyhow!("storage.settings_key must be a plain name, got {key:?}"));
        }
        Ok(())
    }
}

impl SiteConfig {
    fn normalize(&mut self) -> Result<()> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(anyhow!("site.base_url must start with http:// or https://"));
        }
        let mut url = url.to_string();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        Ok(())
    }
}
