use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub generador: GeneradorConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Límites del generador de facturas sintéticas
#[derive(Debug, Deserialize, Clone)]
pub struct GeneradorConfig {
    pub min_items: u32,
    pub max_items: u32,
    pub max_cantidad: u32,
    pub precio_minimo: f64,
    pub precio_maximo: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig { port: 3000 },
            generador: GeneradorConfig::default(),
        }
    }
}

impl Default for GeneradorConfig {
    fn default() -> Self {
        Self {
            min_items: 1,
            max_items: 5,
            max_cantidad: 10,
            precio_minimo: 10.0,
            precio_maximo: 500.0,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[generador]
min_items = 1
max_items = 5
max_cantidad = 10
precio_minimo = 10.0
precio_maximo = 500.0
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Publish the loaded configuration for the rest of the process
pub fn init(config: Config) {
    let _ = CONFIG.set(config);
}

/// Configuration as seen by handlers and services
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}
