use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub report: ReportConfig,
    pub permissions: PermissionsConfig,
    #[serde(default)]
    pub inventory: InventoryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Absolute base URL; empty means "page host on `port`"
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    pub vessel_name: String,
    #[serde(default)]
    pub owner: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PermissionsConfig {
    #[serde(default)]
    pub editor_positions: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InventoryConfig {
    #[serde(default = "default_expiry_warning_days")]
    pub expiry_warning_days: i64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            expiry_warning_days: default_expiry_warning_days(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_expiry_warning_days() -> i64 {
    90
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
                port: default_port(),
            },
            report: ReportConfig {
                vessel_name: "Statek".to_string(),
                owner: String::new(),
            },
            permissions: PermissionsConfig {
                editor_positions: vec!["Kapitan".to_string()],
            },
            inventory: InventoryConfig::default(),
        }
    }
}

const BUNDLED_CONFIG: &str = include_str!("../../config.toml");

/// Parse configuration text, falling back to built-in defaults
pub fn load_config(contents: &str) -> Config {
    match toml::from_str::<Config>(contents) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("config.toml is invalid ({}), using defaults", e);
            Config::default()
        }
    }
}

static CONFIG: Lazy<Config> = Lazy::new(|| load_config(BUNDLED_CONFIG));

pub fn config() -> &'static Config {
    &CONFIG
}
