use std::time::Duration;

use pulse_common::config::ProbeConfig;
use pulse_common::network::target::Target;
use pulse_core::tool::{ServerStatusTool, Tool};
use serde_json::{Value, json};

use crate::util::{closed_port, listener};

#[tokio::test]
async fn tool_reports_every_configured_service() {
    let (_backend, backend_port) = listener().await;
    let targets = vec![
        Target::new("frontend", "127.0.0.1", closed_port().await),
        Target::new("backend", "127.0.0.1", backend_port),
    ];
    let config = ProbeConfig::new(targets, Duration::from_secs(1)).unwrap();

    let output: Value = ServerStatusTool::new(config).call().await.unwrap();

    assert_eq!(output, json!({ "frontend": "DOWN", "backend": "UP" }));
}

#[tokio::test]
async fn default_tool_covers_the_three_local_services() {
    let output: Value = ServerStatusTool::default().call().await.unwrap();

    let map = output.as_object().expect("tool output should be an object");
    let mut names: Vec<&str> = map.keys().map(String::as_str).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["backend", "frontend", "redis"]);
    assert!(map.values().all(|v| v == "UP" || v == "DOWN"));
}
