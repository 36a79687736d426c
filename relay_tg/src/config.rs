use std::fmt;
use std::path::Path;

use config::Config;
use config::ConfigError;
use config::File;
use serde::Deserialize;

/// Environment variable naming an optional TOML config file
pub const CONFIG_PATH_ENV: &str = "ORDER_RELAY_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "order_relay.toml";

/// Environment variables read as overrides, with the config key each one sets.
/// Nothing else from the process environment is consulted.
pub const ENV_OVERRIDES: [(&str, &str); 7] = [
    ("TELEGRAM_TOKEN", "telegram_token"),
    ("TELEGRAM_CHANNEL_ID", "telegram_channel_id"),
    ("DHAN_CLIENT_ID", "dhan_client_id"),
    ("DHAN_ACCESS_TOKEN", "dhan_access_token"),
    ("DHAN_BASE_URL", "dhan_base_url"),
    ("DHAN_REQUEST_TIMEOUT_SECS", "dhan_request_timeout_secs"),
    ("ORDER_RELAY_LOG_DIR", "log_dir"),
];

/// Runtime configuration, built once at startup.
///
/// Keys come from the optional config file, overridden by the variables
/// listed in [`ENV_OVERRIDES`].
#[derive(Clone, Deserialize)]
pub struct RelayConfig {
    pub telegram_token: String,
    pub telegram_channel_id: i64,
    pub dhan_client_id: String,
    pub dhan_access_token: String,
    #[serde(default = "default_base_url")]
    pub dhan_base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub dhan_request_timeout_secs: u64,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

fn default_base_url() -> String {
    relay_http::dhan::DHAN_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_log_dir() -> String {
    "logs".to_string()
}

impl RelayConfig {
    /// Load from `$ORDER_RELAY_CONFIG` (or `order_relay.toml`) and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let vars = ENV_OVERRIDES.into_iter().filter_map(|(name, _)| std::env::var(name).ok().map(|value| (name.to_string(), value)));
        Self::load_from(path, vars)
    }

    /// Load from a config file plus environment overrides taken from `vars`
    pub fn load_from<P, I>(path: P, vars: I) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: Vec<(String, String)> = vars.into_iter().collect();
        let mut builder = Config::builder().add_source(File::from(path.as_ref()).required(false));

        for (env_name, key) in ENV_OVERRIDES {
            let value = vars.iter().find(|(name, _)| name.as_str() == env_name).map(|(_, value)| value.clone());
            builder = builder.set_override_option(key, value)?;
        }

        Self::from_config(builder.build()?)
    }

    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let relay: RelayConfig = config.try_deserialize()?;

        for (key, value) in [
            ("telegram_token", &relay.telegram_token),
            ("dhan_client_id", &relay.dhan_client_id),
            ("dhan_access_token", &relay.dhan_access_token),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Message(format!("{key} must not be empty")));
            }
        }

        Ok(relay)
    }
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("telegram_token", &"<redacted>")
            .field("telegram_channel_id", &self.telegram_channel_id)
            .field("dhan_client_id", &self.dhan_client_id)
            .field("dhan_access_token", &"<redacted>")
            .field("dhan_base_url", &self.dhan_base_url)
            .field("dhan_request_timeout_secs", &self.dhan_request_timeout_secs)
            .field("log_dir", &self.log_dir)
            .finish()
    }
}
