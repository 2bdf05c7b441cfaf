pub use crate::utils::database;
use crate::utils::id::{IdSupplier, UlidSupplier};
use async_trait::async_trait;
use std::{env, path::PathBuf, sync::Arc};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub url: String,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db: database::Database,
    pub ids: Arc<dyn IdSupplier>,
}

impl Context {
    /// Empty collections and a fresh id supplier, without touching the
    /// environment.
    pub fn in_memory(app: AppContext) -> Self {
        Self {
            app,
            db: database::Database::default(),
            ids: Arc::new(UlidSupplier::default()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub seed_file: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub url: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT number: {0}")]
    InvalidPort(String),
    #[error(transparent)]
    Seed(#[from] database::SeedError),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let raw_port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
        let port = raw_port
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(raw_port.clone()))?;
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let seed_file = env::var("SEED_FILE").ok().map(PathBuf::from);

        Ok(Self {
            database: DatabaseConfig { seed_file },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url,
            },
        })
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, ConfigError>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, ConfigError> {
        let seed = match &self.database.seed_file {
            Some(path) => database::load_seed(path).await?,
            None => database::Seed::default(),
        };

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                url: self.app.url,
            },
            db: database::Database::new(seed),
            ids: Arc::new(UlidSupplier::default()),
        })
    }
}
