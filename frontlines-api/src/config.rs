use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DATASET_ROUTE: &str = "/data/companies.json";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub cors: Option<CorsConfig>,
    pub server: Option<ServerConfig>,
    pub data: Option<DataConfig>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            cors: Some(CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
            }),
            server: Some(ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            }),
            data: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Optional `[data]` section. Missing keys are derived when the config is read.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct DataConfig {
    /// URL the session fetches the company list from. Defaults to this
    /// service's own dataset route on the configured `[server]` address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Local JSON document served at [`DATASET_ROUTE`]. Relative paths are
    /// resolved against the directory holding the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Fully resolved data settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSource {
    pub url: String,
    pub file: PathBuf,
}

/// Dataset shipped in the source tree, used when no `file` is configured.
pub fn bundled_dataset_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("data")
        .join("companies.json")
}

impl ApiConfig {
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        Self::load_from(get_config_path())
    }

    /// Loads the config at `config_path`, writing the defaults there first if
    /// the file does not exist yet.
    pub fn load_from(config_path: PathBuf) -> Result<(Self, PathBuf), ConfigError> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        if !config_path.exists() {
            write_default_config(&config_path)?;
        }

        let builder = Config::builder()
            .add_source(File::from(config_path.clone()))
            .build()?;

        let config: ApiConfig = builder.try_deserialize()?;

        Ok((config, config_path))
    }

    pub fn server_address(&self) -> (String, u16) {
        match &self.server {
            Some(server) => (server.host.clone(), server.port),
            None => (DEFAULT_HOST.to_string(), DEFAULT_PORT),
        }
    }

    /// Resolves the `[data]` section against the server address and the
    /// location of the config file it was read from.
    pub fn data_source(&self, config_path: &Path) -> DataSource {
        let data = self.data.clone().unwrap_or_default();

        let url = data.url.unwrap_or_else(|| {
            let (host, port) = self.server_address();
            format!("http://{}:{}{}", connect_host(&host), port, DATASET_ROUTE)
        });

        let file = match data.file {
            Some(file) if file.is_relative() => config_path
                .parent()
                .map(|dir| dir.join(&file))
                .unwrap_or(file),
            Some(file) => file,
            None => bundled_dataset_path(),
        };

        DataSource { url, file }
    }
}

/// Wildcard listen addresses are not connectable, so the loader uses loopback.
fn connect_host(host: &str) -> &str {
    match host {
        "0.0.0.0" | "::" | "[::]" => DEFAULT_HOST,
        other => other,
    }
}

fn write_default_config(config_path: &Path) -> Result<(), ConfigError> {
    let default_config = toml::to_string_pretty(&ApiConfig::default())
        .map_err(|e| ConfigError::Message(format!("Failed to render default config: {e}")))?;

    std::fs::write(config_path, default_config)
        .map_err(|e| ConfigError::Message(format!("Failed to write default config: {e}")))
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("frontlines").join("api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}
