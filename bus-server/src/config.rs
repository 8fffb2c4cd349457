//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::persist::DEFAULT_ROUTES_FILE;
use crate::planner::PlannerConfig;

/// Address to listen on
pub const LISTEN_ADDR_VAR: &str = "BUS_LISTEN_ADDR";
/// Path of the routes file
pub const ROUTES_FILE_VAR: &str = "BUS_ROUTES_FILE";
/// Minutes added per transfer
pub const TRANSFER_PENALTY_VAR: &str = "BUS_TRANSFER_PENALTY_MINS";
/// Maximum itineraries returned per query
pub const MAX_RESULTS_VAR: &str = "BUS_MAX_RESULTS";

/// Default listen address.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid {var}={value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration for the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub routes_file: PathBuf,
    pub planner: PlannerConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value
    /// if it is set.
    ///
    /// Unset or blank variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let defaults = PlannerConfig::default();
        let listen_addr = match get(LISTEN_ADDR_VAR) {
            Some(v) => parse_var(LISTEN_ADDR_VAR, &v)?,
            None => parse_var(LISTEN_ADDR_VAR, DEFAULT_LISTEN_ADDR)?,
        };
        let routes_file = get(ROUTES_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROUTES_FILE));
        let transfer_penalty_mins = match get(TRANSFER_PENALTY_VAR) {
            Some(v) => parse_var(TRANSFER_PENALTY_VAR, &v)?,
            None => defaults.transfer_penalty_mins,
        };
        let max_results = match get(MAX_RESULTS_VAR) {
            Some(v) => parse_var(MAX_RESULTS_VAR, &v)?,
            None => defaults.max_results,
        };

        Ok(Self {
            listen_addr,
            routes_file,
            planner: PlannerConfig::new(transfer_penalty_mins, max_results),
        })
    }
}

fn parse_var<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.routes_file, PathBuf::from("bus_routes.json"));
        assert_eq!(config.planner, PlannerConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("BUS_LISTEN_ADDR", "0.0.0.0:8080"),
            ("BUS_ROUTES_FILE", "/var/lib/bus/routes.json"),
            ("BUS_TRANSFER_PENALTY_MINS", "5"),
            ("BUS_MAX_RESULTS", " 10 "),
        ])
        .unwrap();
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.routes_file, PathBuf::from("/var/lib/bus/routes.json"));
        assert_eq!(config.planner.transfer_penalty_mins, 5);
        assert_eq!(config.planner.max_results, 10);
    }

    #[test]
    fn blank_values_take_defaults() {
        let config = config_from(&[("BUS_MAX_RESULTS", "  ")]).unwrap();
        assert_eq!(config.planner.max_results, 5);
    }

    #[test]
    fn invalid_value_names_the_variable() {
        let err = config_from(&[("BUS_TRANSFER_PENALTY_MINS", "-1")]).unwrap_err();
        let ConfigError::Invalid { var, value, .. } = &err;
        assert_eq!(*var, "BUS_TRANSFER_PENALTY_MINS");
        assert_eq!(value, "-1");
        assert!(err.to_string().contains("BUS_TRANSFER_PENALTY_MINS"));

        assert!(config_from(&[("BUS_LISTEN_ADDR", "localhost")]).is_err());
    }
}
