use serde::Deserialize;
use std::path::Path;

use crate::api::graphql::DEFAULT_GRAPHQL_PATH;

const ENV_PREFIX: &str = "CLUBS";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_graphql_path")]
    pub graphql_path: String,
    #[serde(default = "default_expose_schema")]
    pub expose_schema: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default = "default_json_logs")]
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            graphql_path: default_graphql_path(),
            expose_schema: default_expose_schema(),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: default_json_logs(),
        }
    }
}

impl Config {
    /// Reads `config.*` from the working directory when present, then
    /// `CLUBS__`-prefixed environment variables.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"));
        Self::finish(builder)
    }

    /// Like [`Config::from_env`] but with an explicit, required config file.
    pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"));
        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, config::ConfigError> {
        let config: Config = builder.build()?.try_deserialize()?;

        if !config.api.graphql_path.starts_with('/') {
            return Err(config::ConfigError::Message(format!(
                "api.graphql_path must start with '/', got `{}`",
                config.api.graphql_path
            )));
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_graphql_path() -> String {
    DEFAULT_GRAPHQL_PATH.to_string()
}

fn default_expose_schema() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_json_logs() -> bool {
    true
}
