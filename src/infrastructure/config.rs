// Configuration: optional TOML file plus WEATHER__-prefixed environment
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Where the forecast comes from. The default points the compact
/// locationforecast endpoint at the fixed Riga coordinates; the
/// credential is sent as a bearer token and may be empty.
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    #[serde(default = "default_upstream_url")]
    pub url: String,
    #[serde(default)]
    pub api_key: String,
}

fn default_port() -> u16 {
    8080
}

fn default_upstream_url() -> String {
    "https://api.met.no/weatherapi/locationforecast/2.0/compact?lat=56.9496&lon=24.1052"
        .to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: default_upstream_url(),
            api_key: String::new(),
        }
    }
}

/// Load configuration from `config/weather.toml` (optional) with
/// environment overrides, e.g. `WEATHER__UPSTREAM__URL`.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/weather").required(false))
        .add_source(config::Environment::with_prefix("WEATHER").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
