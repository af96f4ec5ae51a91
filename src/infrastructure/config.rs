use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
    #[serde(default)]
    pub currency: CurrencySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_listen")]
    pub listen: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamSettings {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CurrencySettings {
    /// Currency every rate is quoted against
    #[serde(default = "default_base")]
    pub base: String,
    /// Currency preselected by the dashboard and the converter
    #[serde(default = "default_currency")]
    pub default: String,
    /// Display names for codes the upstream lists without one
    #[serde(default)]
    pub names: HashMap<String, String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self {
            base: default_base(),
            default: default_currency(),
            names: HashMap::new(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_base() -> String {
    "CNY".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

pub fn load_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
