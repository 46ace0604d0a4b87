//! Exposes the prober to an agent or orchestrator as a callable tool.

use async_trait::async_trait;
use pulse_common::config::ProbeConfig;
use serde_json::{Value, json};
use tracing::info;

use crate::prober::Prober;

/// A capability an agent can invoke without arguments.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// JSON schema of the arguments.
    fn parameters(&self) -> Value {
        json!({ "type": "object", "properties": {}, "required": [] })
    }

    async fn call(&self) -> anyhow::Result<Value>;

    /// Descriptor an orchestrator registers the tool with.
    fn definition(&self) -> Value {
        json!({
            "name": self.name(),
            "description": self.description(),
            "parameters": self.parameters(),
        })
    }
}

/// Reports whether the configured local services accept TCP connections.
pub struct ServerStatusTool {
    config: ProbeConfig,
}

impl ServerStatusTool {
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }
}

impl Default for ServerStatusTool {
    fn default() -> Self {
        Self::new(ProbeConfig::default())
    }
}

#[async_trait]
impl Tool for ServerStatusTool {
    fn name(&self) -> &'static str {
        "check_server_status"
    }

    fn description(&self) -> &'static str {
        "Checks the status of the local servers. Returns an object mapping each \
         service name to 'UP' or 'DOWN'."
    }

    async fn call(&self) -> anyhow::Result<Value> {
        info!("Tool '{}' invoked", self.name());
        let report = Prober::new(self.config.clone()).run().await;
        Ok(serde_json::to_value(report.to_string_map())?)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
