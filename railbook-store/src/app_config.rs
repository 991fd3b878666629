use railbook_core::GeneratorKind;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub booking: BookingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Seed files for the reference data API
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub stations_path: String,
    pub trains_path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            stations_path: "railbook-store/data/stations.json".to_string(),
            trains_path: "railbook-store/data/trains.json".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_timeout() -> u64 { 10 }

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            timeout_seconds: default_timeout(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct BookingConfig {
    #[serde(default)]
    pub generator: GeneratorKind,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Same layering as [`Config::load`] with the files read from `dir`.
    pub fn load_from(dir: &str) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name(&format!("{}/default", dir)))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            // e.g. `RAILBOOK__SERVER__PORT=9000`
            .add_source(
                config::Environment::with_prefix("RAILBOOK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }

    pub fn from_toml(contents: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
