//! Configuration management
//!
//! 設定は以下の優先順位で読み込まれます:
//! 1. 環境変数
//! 2. comicw.toml 設定ファイル
//! 3. デフォルト値
//!
//! 設定ファイル内では `${VAR_NAME}` 形式で環境変数を展開できます。

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::Error;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "comicw.toml";

/// Main configuration for comicw
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Local event store configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// Upstream event source configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Calendar document configuration
    #[serde(default)]
    pub calendar: CalendarConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Port for HTTP server
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to SQLite database file
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// AJAX endpoint that lists events
    #[serde(default = "default_upstream_url")]
    pub url: String,

    /// Value sent as the `type` form field
    #[serde(default = "default_category")]
    pub category: String,

    /// Request timeout in seconds. Unset means wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: default_upstream_url(),
            category: default_category(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Calendar display name (X-WR-CALNAME)
    #[serde(default = "default_calendar_name")]
    pub name: String,

    /// File name offered in Content-Disposition
    #[serde(default = "default_filename")]
    pub filename: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            name: default_calendar_name(),
            filename: default_filename(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_db_path() -> String {
    "comicw.db".to_string()
}

fn default_upstream_url() -> String {
    "https://comicw.co.kr/bbs/ajax.main.php".to_string()
}

fn default_category() -> String {
    "comic".to_string()
}

fn default_calendar_name() -> String {
    "comicw".to_string()
}

fn default_filename() -> String {
    "comicw.ics".to_string()
}

impl Config {
    /// 設定ファイルから環境変数を展開する
    ///
    /// `${VAR_NAME}` 形式の文字列を環境変数の値に置換します。
    /// 環境変数が存在しない場合は空文字列になります。
    fn expand_env_vars(value: &str) -> String {
        let mut result = String::new();
        let mut chars = value.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '$' && chars.peek() == Some(&'{') {
                chars.next(); // '{' を消費

                let mut var_name = String::new();
                for c in chars.by_ref() {
                    if c == '}' {
                        break;
                    }
                    var_name.push(c);
                }

                if let Ok(env_value) = std::env::var(&var_name) {
                    result.push_str(&env_value);
                }
            } else {
                result.push(c);
            }
        }

        result
    }

    /// TOML 設定ファイルから設定を読み込む
    ///
    /// 設定ファイル内の `${VAR_NAME}` は環境変数の値に置換され、
    /// その後 `COMICW_*` 環境変数で上書きされます。
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();

        let toml_content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        let mut cfg = Self::from_toml_str(&toml_content)?;
        cfg.apply_env_overrides()?;
        Ok(cfg)
    }

    /// TOML 文字列をパースする（環境変数展開あり、上書きなし）
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let expanded = Self::expand_env_vars(content);
        toml::from_str(&expanded).map_err(|e| Error::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// デフォルトパスから設定を読み込む
    ///
    /// `./comicw.toml` があればそれを使い、なければ環境変数とデフォルト値のみ。
    pub fn load() -> crate::Result<Self> {
        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            return Self::from_toml_file(DEFAULT_CONFIG_FILE);
        }
        Self::from_env()
    }

    /// Load configuration from environment variables over defaults
    pub fn from_env() -> crate::Result<Self> {
        let mut cfg = Self::default();
        cfg.apply_env_overrides()?;
        Ok(cfg)
    }

    /// 環境変数で設定を上書きする
    fn apply_env_overrides(&mut self) -> crate::Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> crate::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(host) = get("COMICW_HOST") {
            self.server.host = host;
        }
        if let Some(port) = get("COMICW_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| Error::Config(format!("Invalid COMICW_PORT: {}", port)))?;
        }
        if let Some(path) = get("COMICW_DB_PATH") {
            self.store.db_path = path;
        }
        if let Some(url) = get("COMICW_UPSTREAM_URL") {
            self.upstream.url = url;
        }
        if let Some(category) = get("COMICW_UPSTREAM_CATEGORY") {
            self.upstream.category = category;
        }
        if let Some(secs) = get("COMICW_UPSTREAM_TIMEOUT_SECS") {
            let secs = secs.parse().map_err(|_| {
                Error::Config(format!("Invalid COMICW_UPSTREAM_TIMEOUT_SECS: {}", secs))
            })?;
            self.upstream.timeout_secs = Some(secs);
        }
        if let Some(name) = get("COMICW_CALENDAR_NAME") {
            self.calendar.name = name;
        }

        Ok(())
    }

    /// `host:port` string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
