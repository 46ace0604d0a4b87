use std::collections::HashSet;
use std::time::Duration;

use tracing::debug;

use crate::error::ConfigError;
use crate::network::target::{self, Target};

/// Per-attempt connect timeout used when the caller does not pick one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// How the targets of one pass are scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// One target after another; worst case is `targets * timeout`.
    #[default]
    Sequential,
    /// Every target in its own task; worst case is about one `timeout`.
    Concurrent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    targets: Vec<Target>,
    /// Bounds name resolution plus connection establishment for each target.
    pub timeout: Duration,
    pub mode: Mode,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            targets: target::default_targets(),
            timeout: DEFAULT_TIMEOUT,
            mode: Mode::Sequential,
        }
    }
}

impl ProbeConfig {
    /// Builds a config, rejecting lists the report could not represent.
    ///
    /// An empty list is valid and yields an empty report.
    pub fn new(targets: Vec<Target>, timeout: Duration) -> Result<Self, ConfigError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(targets.len());
        for target in &targets {
            if !seen.insert(target.name.as_str()) {
                return Err(ConfigError::DuplicateName(target.name.clone()));
            }
        }

        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout(format!("{}", timeout.as_secs_f64())));
        }

        debug!("Probe config accepted: {} targets, {timeout:?} timeout", targets.len());
        Ok(Self {
            targets,
            timeout,
            mode: Mode::Sequential,
        })
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }
}

/// Converts a user supplied number of seconds (fractions allowed) into a timeout.
pub fn timeout_from_secs(secs: f64) -> Result<Duration, ConfigError> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(ConfigError::InvalidTimeout(secs.to_string()));
    }
    Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidTimeout(secs.to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_probes_three_services_for_one_second() {
        let cfg = ProbeConfig::default();
        assert_eq!(cfg.targets().len(), 3);
        assert_eq!(cfg.timeout, Duration::from_secs(1));
        assert_eq!(cfg.mode, Mode::Sequential);
    }

    #[test]
    fn new_rejects_duplicate_names() {
        let targets = vec![
            Target::new("backend", "localhost", 3001),
            Target::new("backend", "localhost", 3002),
        ];
        assert_eq!(
            ProbeConfig::new(targets, DEFAULT_TIMEOUT),
            Err(ConfigError::DuplicateName("backend".into()))
        );
    }

    #[test]
    fn new_accepts_empty_targets() {
        let cfg = ProbeConfig::new(Vec::new(), DEFAULT_TIMEOUT).unwrap();
        assert!(cfg.targets().is_empty());
    }

    #[test]
    fn new_rejects_zero_timeout() {
        let targets = vec![Target::new("redis", "localhost", 6379)];
        assert!(matches!(
            ProbeConfig::new(targets, Duration::ZERO),
            Err(ConfigError::InvalidTimeout(_))
        ));
    }

    #[test]
    fn new_keeps_target_order() {
        let targets = vec![
            Target::new("redis", "localhost", 6379),
            Target::new("frontend", "localhost", 3002),
        ];
        let cfg = ProbeConfig::new(targets.clone(), DEFAULT_TIMEOUT).unwrap();
        assert_eq!(cfg.targets(), targets.as_slice());
    }

    #[test]
    fn timeout_from_secs_accepts_fractions() {
        assert_eq!(timeout_from_secs(0.25), Ok(Duration::from_millis(250)));
        assert_eq!(timeout_from_secs(2.0), Ok(Duration::from_secs(2)));
    }

    #[test]
    fn timeout_from_secs_rejects_nonsense() {
        for secs in [0.0, -1.0, f64::NAN, f64::INFINITY, 1e30] {
            assert!(timeout_from_secs(secs).is_err(), "accepted {secs}");
        }
    }
}
