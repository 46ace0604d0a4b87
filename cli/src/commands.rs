pub mod check;
pub mod targets;
pub mod tool;

use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use pulse_common::config::{self, Mode, ProbeConfig};
use pulse_common::network::target::{self, Target};

#[derive(Parser)]
#[command(name = "pulse")]
#[command(about = "Checks whether local services accept TCP connections.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce decoration (-q drops headers, -qq prints only results)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Probe the targets once and report which are up
    #[command(alias = "c")]
    Check(CheckArgs),
    /// List the default targets
    #[command(alias = "t")]
    Targets,
    /// Print the agent tool definition and the result of one call
    Tool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Target as NAME=HOST:PORT, repeatable. Defaults to frontend, backend and redis
    #[arg(short, long = "target", value_name = "NAME=HOST:PORT")]
    pub targets: Vec<Target>,

    /// Connect timeout per target in seconds
    #[arg(long, value_name = "SECONDS", default_value = "1", value_parser = parse_timeout)]
    pub timeout: Duration,

    /// Probe all targets at the same time
    #[arg(long)]
    pub concurrent: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with an error when any target is down
    #[arg(long)]
    pub strict: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl CheckArgs {
    pub fn to_config(&self) -> anyhow::Result<ProbeConfig> {
        let targets: Vec<Target> = if self.targets.is_empty() {
            target::default_targets()
        } else {
            self.targets.clone()
        };
        let mode: Mode = if self.concurrent {
            Mode::Concurrent
        } else {
            Mode::Sequential
        };

        Ok(ProbeConfig::new(targets, self.timeout)?.with_mode(mode))
    }
}

fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .parse()
        .map_err(|e| format!("'{s}' is not a number: {e}"))?;
    config::timeout_from_secs(secs).map_err(|e| e.to_string())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
