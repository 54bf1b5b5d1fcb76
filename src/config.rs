use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "medsum";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_WEB_DIR: &str = "web";
/// Largest accepted request body, in bytes.
pub const DEFAULT_MAX_REPORT_BYTES: usize = 1024 * 1024;
/// Characters of report text handed to the narrative summarizer.
pub const NARRATIVE_INPUT_CHARS: usize = 1024;
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.2";
pub const NARRATIVE_TIMEOUT_SECS: u64 = 120;

const ENV_BIND_ADDR: &str = "MEDSUM_BIND_ADDR";
const ENV_WEB_DIR: &str = "MEDSUM_WEB_DIR";
const ENV_MAX_REPORT_BYTES: &str = "MEDSUM_MAX_REPORT_BYTES";
const ENV_OLLAMA_URL: &str = "MEDSUM_OLLAMA_URL";
const ENV_OLLAMA_MODEL: &str = "MEDSUM_OLLAMA_MODEL";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "medsum=debug,medsum_lib=debug,tower_http=info"
    } else {
        "medsum=info,medsum_lib=info,tower_http=warn"
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Where the narrative summarizer lives. Absent means narratives are off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeConfig {
    pub base_url: String,
    pub model: String,
}

/// Runtime configuration of the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub web_dir: PathBuf,
    pub max_report_bytes: usize,
    pub narrative: Option<NarrativeConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            web_dir: PathBuf::from(DEFAULT_WEB_DIR),
            max_report_bytes: DEFAULT_MAX_REPORT_BYTES,
            narrative: None,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup. Unset or blank keys fall
    /// back to defaults; set but unparsable keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_addr = match get(ENV_BIND_ADDR) {
            Some(value) => value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidValue {
                    key: ENV_BIND_ADDR,
                    value,
                    reason: e.to_string(),
                }
            })?,
            None => AppConfig::default().bind_addr,
        };

        let max_report_bytes = match get(ENV_MAX_REPORT_BYTES) {
            Some(value) => match value.parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::InvalidValue {
                        key: ENV_MAX_REPORT_BYTES,
                        value,
                        reason: "must be greater than zero".into(),
                    })
                }
                Ok(n) => n,
                Err(e) => {
                    return Err(ConfigError::InvalidValue {
                        key: ENV_MAX_REPORT_BYTES,
                        value,
                        reason: e.to_string(),
                    })
                }
            },
            None => DEFAULT_MAX_REPORT_BYTES,
        };

        let narrative = get(ENV_OLLAMA_URL).map(|base_url| NarrativeConfig {
            base_url,
            model: get(ENV_OLLAMA_MODEL).unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_string()),
        });

        Ok(Self {
            bind_addr,
            web_dir: get(ENV_WEB_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_WEB_DIR)),
            max_report_bytes,
            narrative,
        })
    }
}
