//! # Probe Target Model
//!
//! A target is a named TCP endpoint whose reachability gets checked.
//!
//! Targets can be written on the command line as `name=host:port`:
//! * `backend=localhost:3001`
//! * `db=10.0.0.7:5432`
//! * `cache=[::1]:6379` (IPv6 literals go in brackets)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A named (host, port) pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    pub host: String,
    pub port: u16,
}

impl Target {
    /// A host given as `[v6]` is stored without its brackets.
    pub fn new(name: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        let mut host: String = host.into();
        let bare: Option<String> = host
            .strip_prefix('[')
            .and_then(|inner| inner.strip_suffix(']'))
            .map(str::to_string);
        if let Some(bare) = bare {
            host = bare;
        }

        Self {
            name: name.into(),
            host,
            port,
        }
    }

    /// The `host:port` string handed to the resolver.
    pub fn address(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.address())
    }
}

/// The services checked when the caller does not name any.
pub fn default_targets() -> Vec<Target> {
    vec![
        Target::new("frontend", "localhost", 3002),
        Target::new("backend", "localhost", 3001),
        Target::new("redis", "localhost", 6379),
    ]
}

impl FromStr for Target {
    type Err = ConfigError;

    /// Parses `name=host:port`.
    ///
    /// The port is split off at the last `:`, so only bracketed IPv6 hosts
    /// are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((name, endpoint)) = s.split_once('=') else {
            return Err(ConfigError::invalid_target(s, "expected name=host:port"));
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::invalid_target(s, "name cannot be empty"));
        }

        let (host, port) = parse_endpoint(s, endpoint.trim())?;

        Ok(Target::new(name, host, port))
    }
}

/// Splits `host:port` or `[v6]:port`.
fn parse_endpoint<'a>(original_s: &str, endpoint: &'a str) -> Result<(&'a str, u16), ConfigError> {
    let Some((host, port_str)) = endpoint.rsplit_once(':') else {
        return Err(ConfigError::invalid_target(original_s, "missing port"));
    };

    let host = match host.strip_prefix('[') {
        Some(inner) => inner
            .strip_suffix(']')
            .ok_or_else(|| ConfigError::invalid_target(original_s, "unclosed '[' in host"))?,
        None if host.contains(':') => {
            return Err(ConfigError::invalid_target(
                original_s,
                "IPv6 hosts must be written in brackets",
            ));
        }
        None => host,
    };

    if host.is_empty() {
        return Err(ConfigError::invalid_target(original_s, "host cannot be empty"));
    }

    let port = port_str
        .parse::<u16>()
        .map_err(|e| ConfigError::invalid_target(original_s, format!("invalid port '{port_str}': {e}")))?;

    Ok((host, port))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
