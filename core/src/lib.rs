pub mod network;
pub mod prober;
pub mod tool;

pub use prober::{Probe, Prober, check_status};
pub use tool::{ServerStatusTool, Tool};
