//! Site configuration.
//!
//! Values are layered in this order, later sources winning:
//! built-in defaults, `hotel-site.toml` in the working directory (or the file
//! passed with `--config`), then `HOTEL_SITE_*` environment variables.

use crate::error::ConfigError;
use config::{Config, Environment, File};
use reqwest::Url;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

pub const ENV_PREFIX: &str = "HOTEL_SITE";
const DEFAULT_FILE: &str = "hotel-site";

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// GraphQL endpoint of the content platform
    pub api_endpoint: String,
    /// Read-only API token sent as a bearer credential
    pub api_token: String,
    /// Sandbox environment name; primary environment when unset
    pub environment: Option<String>,
    pub bind: String,
    pub site_name: String,
    /// Base URL of the CMS admin, used for "edit" links
    pub editor_base_url: String,
    /// Model id of the hotel record type inside the CMS admin
    pub hotel_item_type: String,
    /// How long a rendered page may be served before the host re-renders it
    pub revalidate_secs: u64,
    /// Shared secret for `/api/draft-mode/enable`; draft mode is off when unset
    pub draft_secret: Option<String>,
    pub request_timeout_secs: u64,
}

impl SiteConfig {
    /// Load from `path` (or the default file if present) and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::from_sources(path, Environment::with_prefix(ENV_PREFIX))
    }

    pub fn from_sources(path: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("api_endpoint", "https://graphql.datocms.com/")?
            .set_default("api_token", "")?
            .set_default("bind", "127.0.0.1:3000")?
            .set_default("site_name", "DirectBooker Demo")?
            .set_default("editor_base_url", "https://directbooker-demo.admin.datocms.com")?
            .set_default("hotel_item_type", "GRbFPTlRSt6tp-ue5btGWA")?
            .set_default("revalidate_secs", 60_i64)?
            .set_default("request_timeout_secs", 30_i64)?;

        let builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_FILE).required(false)),
        };

        let mut config: SiteConfig = builder.add_source(env).build()?.try_deserialize()?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    fn normalize(&mut self) {
        for field in [&mut self.environment, &mut self.draft_secret] {
            if field.as_deref().is_some_and(|v| v.trim().is_empty()) {
                *field = None;
            }
        }
        self.editor_base_url = self.editor_base_url.trim_end_matches('/').to_string();
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api_token.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "api_token is required (set {}_API_TOKEN)",
                ENV_PREFIX
            )));
        }
        Url::parse(&self.api_endpoint).map_err(|e| {
            ConfigError::Invalid(format!("api_endpoint {:?}: {}", self.api_endpoint, e))
        })?;
        self.bind_addr()?;
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("bind {:?}: {}", self.bind, e)))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// CMS admin URL for editing one hotel record
    pub fn editor_url(&self, item_id: &str) -> String {
        format!(
            "{}/editor/item_types/{}/items/{}",
            self.editor_base_url, self.hotel_item_type, item_id
        )
    }
}

#[cfg(test)]
impl SiteConfig {
    pub fn for_tests() -> Self {
        Self {
            api_endpoint: "http://127.0.0.1:9/".to_string(),
            api_token: "test-token".to_string(),
            environment: None,
            bind: "127.0.0.1:0".to_string(),
            site_name: "Test Site".to_string(),
            editor_base_url: "https://example.admin.datocms.com".to_string(),
            hotel_item_type: "hotel-model".to_string(),
            revalidate_secs: 60,
            draft_secret: Some("secret".to_string()),
            request_timeout_secs: 5,
        }
    }
}
