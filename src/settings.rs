use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize)]
pub struct Database {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize)]
pub struct Assets {
    /// Served under `/img`, holds the placeholder avatar.
    pub public_dir: String,
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub filter: String,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub database: Database,
    pub assets: Assets,
    pub log: Log,
}

impl Settings {
    /// Defaults, then `config.toml` if present, then `NOTES__*` variables
    /// (e.g. `NOTES__SERVER__PORT=8080`).
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_sources(
            File::with_name("config.toml")
                .format(FileFormat::Toml)
                .required(false),
            Environment::with_prefix("NOTES")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
    }

    fn from_sources(
        file: File<config::FileSourceFile, FileFormat>,
        environment: Environment,
    ) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8010)?
            .set_default("database.url", "sqlite://notes.db")?
            .set_default("database.max_connections", 5)?
            .set_default("assets.public_dir", "public")?
            .set_default("log.filter", "notes=info,tower_http=info")?
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()
    }
}
