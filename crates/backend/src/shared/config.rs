use contracts::system::site_config::{
    FirebaseOptions, SiteConfig, DEFAULT_APP_ID, DEFAULT_COLLECTION,
};
use serde::Deserialize;
use std::net::SocketAddr;

use contracts::domain::a002_booking::message::DEFAULT_BOOKING_PHONE;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub admin: AdminConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the built frontend (index.html + wasm bundle)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteSection {
    #[serde(default = "default_app_id")]
    pub app_id: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    #[serde(default = "default_phone")]
    pub whatsapp_phone: String,
    #[serde(default)]
    pub initial_auth_token: Option<String>,
    #[serde(default)]
    pub firebase: FirebaseSection,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FirebaseSection {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub auth_domain: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub storage_bucket: String,
    #[serde(default)]
    pub messaging_sender_id: String,
    #[serde(default)]
    pub app_id: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AdminConfig {
    /// argon2 PHC string
    #[serde(default)]
    pub password_hash: Option<String>,
    /// Plaintext secret, development only: hashed at startup
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub jwt_secret: Option<String>,
    #[serde(default = "default_token_lifetime_hours")]
    pub token_lifetime_hours: i64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

fn default_app_id() -> String {
    DEFAULT_APP_ID.to_string()
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

fn default_phone() -> String {
    DEFAULT_BOOKING_PHONE.to_string()
}

fn default_token_lifetime_hours() -> i64 {
    12
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            app_id: default_app_id(),
            collection: default_collection(),
            whatsapp_phone: default_phone(),
            initial_auth_token: None,
            firebase: FirebaseSection::default(),
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            password_hash: None,
            password: None,
            jwt_secret: None,
            token_lifetime_hours: default_token_lifetime_hours(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid server address {}:{}: {}", self.host, self.port, e))
    }
}

impl From<&FirebaseSection> for FirebaseOptions {
    fn from(section: &FirebaseSection) -> Self {
        FirebaseOptions {
            api_key: section.api_key.clone(),
            auth_domain: section.auth_domain.clone(),
            project_id: section.project_id.clone(),
            storage_bucket: section.storage_bucket.clone(),
            messaging_sender_id: section.messaging_sender_id.clone(),
            app_id: section.app_id.clone(),
        }
    }
}

impl Config {
    /// Public part of the configuration, safe to send to the browser
    pub fn site_config(&self) -> SiteConfig {
        SiteConfig {
            firebase: FirebaseOptions::from(&self.site.firebase),
            app_id: self.site.app_id.clone(),
            collection: self.site.collection.clone(),
            whatsapp_phone: self.site.whatsapp_phone.clone(),
            initial_auth_token: self
                .site
                .initial_auth_token
                .clone()
                .filter(|t| !t.trim().is_empty()),
        }
    }

    /// Environment overrides: `PORT`, `ARUS_ADMIN_PASSWORD_HASH`, `ARUS_JWT_SECRET`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Some(hash) = lookup("ARUS_ADMIN_PASSWORD_HASH") {
            self.admin.password_hash = Some(hash);
        }
        if let Some(secret) = lookup("ARUS_JWT_SECRET") {
            self.admin.jwt_secret = Some(secret);
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[site]
app_id = "default-app-id"
collection = "portfolio_arus_digital_v2"
whatsapp_phone = "6285731021469"
"#;

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Environment overrides are applied on top of either.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = match config_next_to_exe() {
        Some(path) => {
            tracing::info!("Loading config from: {}", path.display());
            parse_config(&std::fs::read_to_string(&path)?)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            parse_config(DEFAULT_CONFIG)?
        }
    };
    config.apply_overrides(|key| std::env::var(key).ok());
    Ok(config)
}

fn config_next_to_exe() -> Option<std::path::PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let config_path = exe_path.parent()?.join("config.toml");
    if config_path.exists() {
        Some(config_path)
    } else {
        tracing::warn!("config.toml not found at: {}", config_path.display());
        None
    }
}
