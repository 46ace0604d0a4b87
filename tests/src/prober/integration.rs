use std::time::{Duration, Instant};

use pulse_common::config::{Mode, ProbeConfig};
use pulse_common::network::status::{Status, StatusReport};
use pulse_common::network::target::Target;
use pulse_core::prober::{Prober, check_status};
use serde_json::json;
use tokio::io::AsyncReadExt;

use crate::util::{closed_port, listener};

const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// TEST-NET-3, reserved for documentation and never routed.
const UNROUTABLE: &str = "203.0.113.1";

#[tokio::test]
async fn nothing_listening_reports_down() {
    let targets = vec![Target::new("frontend", "127.0.0.1", closed_port().await)];

    let report: StatusReport = check_status(targets, PROBE_TIMEOUT).await.unwrap();

    assert_eq!(serde_json::to_value(&report).unwrap(), json!({ "frontend": "DOWN" }));
}

#[tokio::test]
async fn listening_service_reports_up() {
    let (_listener, port) = listener().await;
    let targets = vec![Target::new("backend", "127.0.0.1", port)];

    let report: StatusReport = check_status(targets, PROBE_TIMEOUT).await.unwrap();

    assert_eq!(serde_json::to_value(&report).unwrap(), json!({ "backend": "UP" }));
}

#[tokio::test]
async fn localhost_name_is_resolved() {
    let (_listener, port) = listener().await;
    let targets = vec![Target::new("backend", "localhost", port)];

    let report: StatusReport = check_status(targets, PROBE_TIMEOUT).await.unwrap();

    assert_eq!(report.get("backend"), Some(Status::Up));
}

fn three_services(frontend: u16, backend: u16, redis: u16) -> Vec<Target> {
    vec![
        Target::new("frontend", "127.0.0.1", frontend),
        Target::new("backend", "127.0.0.1", backend),
        Target::new("redis", "127.0.0.1", redis),
    ]
}

#[tokio::test]
async fn only_backend_listening() {
    let (_backend, backend_port) = listener().await;
    let targets = three_services(closed_port().await, backend_port, closed_port().await);

    for mode in [Mode::Sequential, Mode::Concurrent] {
        let config = ProbeConfig::new(targets.clone(), PROBE_TIMEOUT).unwrap().with_mode(mode);
        let report: StatusReport = Prober::new(config).run().await;

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({ "frontend": "DOWN", "backend": "UP", "redis": "DOWN" }),
            "mode {mode:?}"
        );
    }
}

#[tokio::test]
async fn report_has_exactly_one_entry_per_target() {
    let (_open, open_port) = listener().await;
    let targets = vec![
        Target::new("a", "127.0.0.1", open_port),
        Target::new("b", "127.0.0.1", closed_port().await),
        Target::new("c", "no-such-host.invalid", 80),
        Target::new("d", UNROUTABLE, 9),
    ];

    let report: StatusReport = check_status(targets.clone(), Duration::from_millis(300))
        .await
        .unwrap();

    assert_eq!(report.len(), targets.len());
    for target in &targets {
        assert!(report.get(&target.name).is_some(), "missing {}", target.name);
    }
}

#[tokio::test]
async fn unreachable_host_is_bounded_by_timeout() {
    let probe_timeout = Duration::from_millis(300);
    let targets = vec![Target::new("remote", UNROUTABLE, 9)];

    let started = Instant::now();
    let report: StatusReport = check_status(targets, probe_timeout).await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(report.get("remote"), Some(Status::Down));
    assert!(
        elapsed < probe_timeout + Duration::from_millis(700),
        "probe took {elapsed:?}"
    );
}

#[tokio::test]
async fn concurrent_mode_waits_about_one_timeout() {
    let probe_timeout = Duration::from_millis(300);
    let targets: Vec<Target> = (0..4)
        .map(|i| Target::new(format!("remote-{i}"), UNROUTABLE, 9 + i))
        .collect();
    let config = ProbeConfig::new(targets, probe_timeout)
        .unwrap()
        .with_mode(Mode::Concurrent);

    let started = Instant::now();
    let report: StatusReport = Prober::new(config).run().await;
    let elapsed = started.elapsed();

    assert_eq!(report.down_count(), 4);
    assert!(
        elapsed < probe_timeout * 3,
        "concurrent probes took {elapsed:?}"
    );
}

#[tokio::test]
async fn probe_closes_connection_without_sending_data() {
    let (listener, port) = listener().await;
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received: Vec<u8> = Vec::new();
        socket.read_to_end(&mut received).await.unwrap();
        received
    });

    let targets = vec![Target::new("backend", "127.0.0.1", port)];
    let report: StatusReport = check_status(targets, PROBE_TIMEOUT).await.unwrap();
    assert!(report.all_up());

    let received = tokio::time::timeout(Duration::from_secs(2), server)
        .await
        .expect("probe left the connection open")
        .unwrap();
    assert!(received.is_empty());
}
