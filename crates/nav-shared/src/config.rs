//! Configuration management

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_GRAPHQL_PATH, DEFAULT_MAX_QUERY_COMPLEXITY, DEFAULT_MAX_QUERY_DEPTH,
    DEFAULT_MAX_TREE_DEPTH, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub graphql: GraphqlSettings,
    pub navigation: NavigationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GraphqlSettings {
    pub path: String,
    /// Serve the GraphiQL IDE on `GET {path}`
    pub playground: bool,
    pub introspection: bool,
    pub max_query_depth: usize,
    pub max_query_complexity: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NavigationSettings {
    pub default_page_size: u32,
    pub max_page_size: u32,
    pub max_tree_depth: usize,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
    /// When set, logs are also written to a daily-rolling file in this directory
    pub directory: Option<String>,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            max_tree_depth: DEFAULT_MAX_TREE_DEPTH,
        }
    }
}

impl AppConfig {
    /// Layered load: defaults, `config/default`, `config/{APP_ENV}`, then `NAV_*` env vars.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::with_defaults()?
            .set_default("app.env", env.clone())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("NAV")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Builds a config from defaults overlaid with an inline TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self, AppError> {
        let config = Self::with_defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "nav-server")?
            .set_default("graphql.path", DEFAULT_GRAPHQL_PATH)?
            .set_default("graphql.playground", true)?
            .set_default("graphql.introspection", true)?
            .set_default("graphql.max_query_depth", DEFAULT_MAX_QUERY_DEPTH as u64)?
            .set_default("graphql.max_query_complexity", DEFAULT_MAX_QUERY_COMPLEXITY as u64)?
            .set_default("navigation.default_page_size", DEFAULT_PAGE_SIZE)?
            .set_default("navigation.max_page_size", MAX_PAGE_SIZE)?
            .set_default("navigation.max_tree_depth", DEFAULT_MAX_TREE_DEPTH as u64)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "json")
    }
}
