//! Process configuration.
//!
//! Read from environment variables at startup:
//!
//! | Variable             | Default                | Meaning                        |
//! |----------------------|------------------------|--------------------------------|
//! | `METRO_NETWORK_FILE` | `formatted_subway.txt` | Canonical record file to load  |
//! | `METRO_BIND_ADDR`    | `127.0.0.1:3000`       | Address the HTTP API binds to  |
//! | `METRO_MAX_PATHS`    | unset (no cap)         | Cap on enumerated simple paths |

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::planner::PlannerConfig;

const NETWORK_FILE_VAR: &str = "METRO_NETWORK_FILE";
const BIND_ADDR_VAR: &str = "METRO_BIND_ADDR";
const MAX_PATHS_VAR: &str = "METRO_MAX_PATHS";

const DEFAULT_NETWORK_FILE: &str = "formatted_subway.txt";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set to something unparseable
    #[error("invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Path of the canonical record file.
    pub network_file: PathBuf,

    /// Address for the HTTP listener.
    pub bind_addr: SocketAddr,

    /// Query limits passed to the planner.
    pub planner: PlannerConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps variable names to values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let network_file = lookup(NETWORK_FILE_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_NETWORK_FILE.to_string())
            .into();

        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(value) => value
                .trim()
                .parse::<SocketAddr>()
                .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                    var: BIND_ADDR_VAR,
                    value: value.clone(),
                    reason: e.to_string(),
                })?,
            None => default_bind_addr(),
        };

        let planner = match lookup(MAX_PATHS_VAR) {
            Some(value) => {
                let max_paths: usize =
                    value
                        .trim()
                        .parse()
                        .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                            var: MAX_PATHS_VAR,
                            value: value.clone(),
                            reason: e.to_string(),
                        })?;
                PlannerConfig::with_max_paths(max_paths)
            }
            None => PlannerConfig::default(),
        };

        Ok(Self {
            network_file,
            bind_addr,
            planner,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            network_file: DEFAULT_NETWORK_FILE.into(),
            bind_addr: default_bind_addr(),
            planner: PlannerConfig::default(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}
