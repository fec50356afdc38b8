use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub uploads: UploadsConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 5000, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
            run_migrations: true,
        }
    }
}

/// In-process cache sizing. Entries never expire on their own.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_capacity")]
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self { Self { max_capacity: default_cache_capacity() } }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub access_token_key: String,
    #[serde(default)]
    pub refresh_token_key: String,
    #[serde(default = "default_access_age")]
    pub access_token_age_secs: u64,
    #[serde(default = "default_refresh_age")]
    pub refresh_token_age_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_key: String::new(),
            refresh_token_key: String::new(),
            access_token_age_secs: default_access_age(),
            refresh_token_age_secs: default_refresh_age(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadsConfig {
    #[serde(default = "default_uploads_dir")]
    pub dir: String,
    #[serde(default = "default_max_upload_bytes")]
    pub max_bytes: usize,
    /// Base for cover URLs; derived from `server.host`/`server.port` when empty.
    #[serde(default)]
    pub public_base_url: String,
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self { dir: default_uploads_dir(), max_bytes: default_max_upload_bytes(), public_base_url: String::new() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl Default for ExportConfig {
    fn default() -> Self { Self { queue_capacity: default_queue_capacity() } }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { format: default_log_format() } }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }
fn default_true() -> bool { true }
fn default_cache_capacity() -> u64 { 10_000 }
fn default_access_age() -> u64 { 1800 }
fn default_refresh_age() -> u64 { 60 * 60 * 24 * 30 }
fn default_uploads_dir() -> String { "uploads/images".into() }
fn default_max_upload_bytes() -> usize { 512_000 }
fn default_queue_capacity() -> usize { 1024 }
fn default_log_format() -> String { "compact".into() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
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
    /// Load `config.toml` (or `CONFIG_PATH`), falling back to defaults when the
    /// file is absent, then fill gaps from the environment and validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = match load_default() {
            Ok(cfg) => cfg,
            Err(e) if is_missing_file(&e) => AppConfig::default(),
            Err(e) => return Err(e),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize_from_env();
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        self.auth.normalize_from_env();
        self.auth.validate()?;
        self.uploads.normalize(&self.server);
        self.uploads.validate()?;
        if self.export.queue_capacity == 0 {
            return Err(anyhow!("export.queue_capacity must be >= 1"));
        }
        Ok(())
    }
}

fn is_missing_file(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .map(|io| io.kind() == std::io::ErrorKind::NotFound)
        .unwrap_or(false)
}

impl ServerConfig {
    fn normalize_from_env(&mut self) {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            if !host.trim().is_empty() { self.host = host; }
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            self.port = port;
        }
    }

    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database.url must start with postgresql:// or postgres://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl AuthConfig {
    pub fn normalize_from_env(&mut self) {
        if self.access_token_key.trim().is_empty() {
            if let Ok(k) = std::env::var("ACCESS_TOKEN_KEY") { self.access_token_key = k; }
        }
        if self.refresh_token_key.trim().is_empty() {
            if let Ok(k) = std::env::var("REFRESH_TOKEN_KEY") { self.refresh_token_key = k; }
        }
        if let Some(age) = std::env::var("ACCESS_TOKEN_AGE").ok().and_then(|v| v.parse::<u64>().ok()) {
            self.access_token_age_secs = age;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.access_token_key.trim().is_empty() || self.refresh_token_key.trim().is_empty() {
            return Err(anyhow!("auth.access_token_key and auth.refresh_token_key are required"));
        }
        if self.access_token_key == self.refresh_token_key {
            return Err(anyhow!("access and refresh token keys must differ"));
        }
        if self.access_token_age_secs == 0 || self.refresh_token_age_secs == 0 {
            return Err(anyhow!("token ages must be positive seconds"));
        }
        Ok(())
    }
}

impl UploadsConfig {
    fn normalize(&mut self, server: &ServerConfig) {
        if self.public_base_url.trim().is_empty() {
            self.public_base_url = format!("http://{}:{}", server.host, server.port);
        }
        while self.public_base_url.ends_with('/') {
            self.public_base_url.pop();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.dir.trim().is_empty() {
            return Err(anyhow!("uploads.dir is empty"));
        }
        if self.max_bytes == 0 {
            return Err(anyhow!("uploads.max_bytes must be >= 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> AppConfig {
        load_from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 5000

            [database]
            url = "postgres://u:p@localhost:5432/openmusic"

            [auth]
            access_token_key = "access"
            refresh_token_key = "refresh"
            "#,
        )
        .unwrap()
    }

    #[test]
    fn sections_fall_back_to_defaults() {
        let cfg = valid();
        assert_eq!(cfg.database.max_connections, 10);
        assert_eq!(cfg.uploads.max_bytes, 512_000);
        assert_eq!(cfg.export.queue_capacity, 1024);
        assert_eq!(cfg.auth.access_token_age_secs, 1800);
        assert!(cfg.database.run_migrations);
    }

    #[test]
    fn validation_derives_cover_base_url() {
        let mut cfg = valid();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.uploads.public_base_url, "http://0.0.0.0:5000");
    }

    #[test]
    fn rejects_non_postgres_url() {
        let mut cfg = valid();
        cfg.database.url = "mysql://localhost/db".into();
        assert!(cfg.database.validate().is_err());
    }

    #[test]
    fn rejects_shared_token_keys() {
        let mut cfg = valid();
        cfg.auth.refresh_token_key = cfg.auth.access_token_key.clone();
        assert!(cfg.auth.validate().is_err());
    }

    #[test]
    fn rejects_zero_queue_capacity() {
        let mut cfg = valid();
        cfg.export.queue_capacity = 0;
        assert!(cfg.normalize_and_validate().is_err());
    }
}
