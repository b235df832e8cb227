//! Layered server configuration.
//!
//! Values come from, in increasing priority: built-in defaults, an optional
//! `config.toml` in the working directory, and environment variables with `_` as the
//! section separator (`SERVER_PORT=8080`, `DATABASE_URL=sqlite://blog.db`,
//! `DATABASE_CONNECTIONS=10`). Keys are single words for that reason. A `.env`
//! file is loaded first so it can feed the environment layer.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Database {
    pub url: String,
    /// Upper bound on pooled connections. Single word so that
    /// `DATABASE_CONNECTIONS` maps onto it.
    pub connections: u32,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: "sqlite://blog.db".into(),
            connections: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    pub server: Server,
    pub database: Database,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite://blog.db")?
            .set_default("database.connections", 5)?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::default().separator("_").try_parsing(true))
            .build()?;

        config.try_deserialize()
    }
}
