//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::chat::SessionsConfig;
use crate::pages::ContactDetails;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Externally visible base URL, used when printing absolute links
    #[serde(default = "default_public_url")]
    pub public_url: String,

    /// Allowed CORS origins; empty allows any
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Directory holding the browser bundle under `pkg/`
    #[serde(default = "default_site_root")]
    pub site_root: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_public_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_site_root() -> PathBuf {
    PathBuf::from("target/site")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_url: default_public_url(),
            cors_origins: Vec::new(),
            site_root: default_site_root(),
        }
    }
}

impl ServerConfig {
    /// Socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Lead-capture backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub url: String,

    #[serde(default = "default_backend_timeout")]
    pub timeout_secs: u64,
}

fn default_backend_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_backend_timeout() -> u64 {
    10
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            timeout_secs: default_backend_timeout(),
        }
    }
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Remote chat service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_backend_url")]
    pub url: String,

    #[serde(default = "default_chat_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// Widget sessions idle this long are dropped (seconds)
    #[serde(default = "default_session_idle")]
    pub session_idle_secs: u64,
}

fn default_chat_timeout() -> u64 {
    30
}

fn default_max_sessions() -> usize {
    1000
}

fn default_session_idle() -> u64 {
    900
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            timeout_secs: default_chat_timeout(),
            max_sessions: default_max_sessions(),
            session_idle_secs: default_session_idle(),
        }
    }
}

impl ChatConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn sessions(&self) -> SessionsConfig {
        SessionsConfig {
            max_sessions: self.max_sessions,
            idle_timeout: Duration::from_secs(self.session_idle_secs),
        }
    }
}

/// Inboxes and phone numbers shown on the pages
#[derive(Debug, Clone, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_inbox")]
    pub inbox: String,

    #[serde(default = "default_careers_inbox")]
    pub careers_inbox: String,

    #[serde(default = "default_phone")]
    pub phone: String,

    #[serde(default = "default_phone")]
    pub whatsapp: String,
}

fn default_inbox() -> String {
    ContactDetails::default().inbox
}

fn default_careers_inbox() -> String {
    ContactDetails::default().careers_inbox
}

fn default_phone() -> String {
    ContactDetails::default().phone
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            inbox: default_inbox(),
            careers_inbox: default_careers_inbox(),
            phone: default_phone(),
            whatsapp: default_phone(),
        }
    }
}

impl ContactConfig {
    pub fn details(&self) -> ContactDetails {
        ContactDetails {
            inbox: self.inbox.clone(),
            careers_inbox: self.careers_inbox.clone(),
            phone: self.phone.clone(),
            whatsapp: self.whatsapp.clone(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }

    /// Filter directive used when `RUST_LOG` is unset
    pub fn default_filter(&self) -> String {
        format!("nordisk_sites={},tower_http=debug", self.level)
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("nordisk").join("config.toml")),
            Some(PathBuf::from("/etc/nordisk/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = var("NORDISK_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("NORDISK_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid NORDISK_PORT"),
            }
        }
        if let Some(url) = var("NORDISK_PUBLIC_URL") {
            self.server.public_url = url;
        }
        if let Some(root) = var("NORDISK_SITE_ROOT") {
            self.server.site_root = PathBuf::from(root);
        }

        // Collaborator overrides
        if let Some(url) = var("NORDISK_BACKEND_URL") {
            self.backend.url = url;
        }
        if let Some(url) = var("NORDISK_CHAT_URL") {
            self.chat.url = url;
        }

        // Logging overrides
        if let Some(level) = var("NORDISK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("NORDISK_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Nordisk Sites Configuration
#
# Environment variables override these settings:
# - NORDISK_HOST
# - NORDISK_PORT
# - NORDISK_PUBLIC_URL
# - NORDISK_SITE_ROOT
# - NORDISK_BACKEND_URL
# - NORDISK_CHAT_URL
# - NORDISK_LOG_LEVEL
# - NORDISK_LOG_FORMAT

[server]
# Listen address
host = "0.0.0.0"
port = 8080

# Base URL visitors use to reach this server
public_url = "http://localhost:8080"

# Allowed CORS origins (empty allows any)
cors_origins = []

# Browser bundle built for the interactive widgets (served from {site_root}/pkg)
site_root = "target/site"

[backend]
# Lead-capture backend (email checks and contact registrations)
url = "http://localhost:5000"

# Request timeout in seconds
timeout_secs = 10

[chat]
# Remote chat service; messages are posted to {url}/api/chat
url = "http://localhost:5000"
timeout_secs = 30

# Maximum concurrently open widget sessions
max_sessions = 1000

# Sessions with no activity for this many seconds are dropped
session_idle_secs = 900

[contact]
# Inbox for mailto contact forms
inbox = "customercare@nordisksupport.com"

# Inbox for job applications
careers_inbox = "careers@nordisksupport.com"

# Numbers for the call and WhatsApp links
phone = "+4566776951"
whatsapp = "+4566776951"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty, json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "0.0.0.0:8080");
        assert_eq!(config.server.site_root, PathBuf::from("target/site"));
        assert_eq!(config.backend.url, "http://localhost:5000");
        assert_eq!(config.backend.timeout(), Duration::from_secs(10));
        assert_eq!(config.chat.sessions().max_sessions, 1000);
        assert_eq!(config.chat.sessions().idle_timeout, Duration::from_secs(900));
        assert_eq!(config.contact.details(), ContactDetails::default());
        assert_eq!(config.logging.default_filter(), "nordisk_sites=info,tower_http=debug");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9000\n\n[contact]\ninbox = \"hi@example.com\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.contact.inbox, "hi@example.com");
        assert_eq!(config.contact.careers_inbox, "careers@nordisksupport.com");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.chat.timeout_secs, 30);
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_parse_error_names_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        match Config::load(file.path()) {
            Err(ConfigError::Parse { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/nordisk.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("NORDISK_PORT", "7070"),
            ("NORDISK_BACKEND_URL", "http://backend:5000"),
            ("NORDISK_CHAT_URL", "http://chat:5000"),
            ("NORDISK_LOG_FORMAT", "json"),
            ("NORDISK_SITE_ROOT", "/srv/nordisk"),
        ]);

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.port, 7070);
        assert_eq!(config.backend.url, "http://backend:5000");
        assert_eq!(config.chat.url, "http://chat:5000");
        assert_eq!(config.server.site_root, PathBuf::from("/srv/nordisk"));
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_invalid_port_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "NORDISK_PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.server.port, 8080);
    }
}
