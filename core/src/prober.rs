//! The connectivity **prober**.
//!
//! A [`Prober`] owns a [`ProbeConfig`] and runs one pass over its targets,
//! producing a [`StatusReport`] with exactly one entry per target. How a
//! single target is checked sits behind the [`Probe`] trait; the default is
//! the TCP handshake in [`crate::network::tcp`].
//!
//! Network conditions never surface as errors here. Only a bad target list
//! is rejected, and that happens before anything is sent. An empty list is
//! not bad; it yields an empty report.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pulse_common::config::{Mode, ProbeConfig};
use pulse_common::error::ConfigError;
use pulse_common::network::status::{Status, StatusReport};
use pulse_common::network::target::Target;
use tokio::task::{self, JoinSet};
use tracing::{debug, error, info};

use crate::network::tcp::TcpProbe;

/// Strategy for checking one target.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Attempts to reach `target` within `timeout`.
    ///
    /// Implementations must not fail: anything that prevents reaching the
    /// target is [`Status::Down`].
    async fn probe(&self, target: &Target, timeout: Duration) -> Status;
}

/// Called once per finished target.
pub type ResultCallback = Arc<dyn Fn(&str, Status) + Send + Sync>;

pub struct Prober<P = TcpProbe> {
    config: ProbeConfig,
    probe: Arc<P>,
    on_result: Option<ResultCallback>,
}

impl Prober<TcpProbe> {
    pub fn new(config: ProbeConfig) -> Self {
        Self::with_probe(config, TcpProbe)
    }
}

impl<P: Probe + 'static> Prober<P> {
    pub fn with_probe(config: ProbeConfig, probe: P) -> Self {
        Self {
            config,
            probe: Arc::new(probe),
            on_result: None,
        }
    }

    /// Registers a hook fired as each target's status becomes known.
    pub fn on_result(mut self, callback: impl Fn(&str, Status) + Send + Sync + 'static) -> Self {
        self.on_result = Some(Arc::new(callback));
        self
    }

    /// Executes one probing pass.
    pub async fn run(&self) -> StatusReport {
        let targets: usize = self.config.targets().len();
        debug!("Probing {targets} targets ({:?})", self.config.mode);

        let report = match self.config.mode {
            Mode::Sequential => self.run_sequential().await,
            Mode::Concurrent => self.run_concurrent().await,
        };

        info!("{} of {} targets are up", report.up_count(), report.len());
        report
    }

    async fn run_sequential(&self) -> StatusReport {
        let mut report = StatusReport::new();
        for target in self.config.targets() {
            let status: Status = self.probe.probe(target, self.config.timeout).await;
            self.notify(&target.name, status);
            report.insert(target.name.clone(), status);
        }
        report
    }

    async fn run_concurrent(&self) -> StatusReport {
        // Pre-filled so a task that dies still leaves its target in the report.
        let mut report: StatusReport = self
            .config
            .targets()
            .iter()
            .map(|target| (target.name.clone(), Status::Down))
            .collect();

        let mut tasks: JoinSet<(String, Status)> = JoinSet::new();
        let mut task_names: HashMap<task::Id, String> = HashMap::new();
        for target in self.config.targets().iter().cloned() {
            let probe = Arc::clone(&self.probe);
            let probe_timeout = self.config.timeout;
            let name: String = target.name.clone();
            let handle = tasks.spawn(async move {
                let status = probe.probe(&target, probe_timeout).await;
                (target.name, status)
            });
            task_names.insert(handle.id(), name);
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((name, status)) => {
                    self.notify(&name, status);
                    report.insert(name, status);
                }
                Err(e) => {
                    error!("Probe task failed: {e}");
                    if let Some(name) = task_names.get(&e.id()) {
                        self.notify(name, Status::Down);
                    }
                }
            }
        }
        report
    }

    fn notify(&self, name: &str, status: Status) {
        if let Some(callback) = &self.on_result {
            callback(name, status);
        }
    }
}

/// Checks every target once, in order, with the given per-attempt timeout.
pub async fn check_status(targets: Vec<Target>, timeout: Duration) -> Result<StatusReport, ConfigError> {
    let config = ProbeConfig::new(targets, timeout)?;
    Ok(Prober::new(config).run().await)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
