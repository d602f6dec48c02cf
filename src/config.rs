use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::services::auth::DEFAULT_LATENCY;

/// Runtime configuration collected from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the persisted storage slots.
    pub data_dir: PathBuf,
    /// Simulated network latency applied to sign-in and sign-up.
    pub auth_latency: Duration,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults
    /// for anything unset or unparseable.
    pub fn from_env() -> Self {
        let data_dir = env::var("BRANDBOARD_DATA_DIR")
            .unwrap_or_else(|_| "data".to_string())
            .into();

        let auth_latency = env::var("BRANDBOARD_AUTH_DELAY_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_LATENCY);

        Self {
            data_dir,
            auth_latency,
        }
    }
}
