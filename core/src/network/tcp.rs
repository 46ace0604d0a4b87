use std::time::Duration;

use async_trait::async_trait;
use pulse_common::network::status::Status;
use pulse_common::network::target::Target;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use crate::prober::Probe;

/// Checks a target with a plain TCP handshake.
///
/// Resolution and connection share one timeout. Every failure maps to
/// [`Status::Down`]; the cause only shows up in debug logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpProbe;

#[async_trait]
impl Probe for TcpProbe {
    async fn probe(&self, target: &Target, probe_timeout: Duration) -> Status {
        let address: String = target.address();

        match timeout(probe_timeout, TcpStream::connect(address.as_str())).await {
            Ok(Ok(stream)) => {
                drop(stream);
                Status::Up
            }
            Ok(Err(e)) => {
                debug!("{} ({address}) unreachable: {e}", target.name);
                Status::Down
            }
            Err(_elapsed) => {
                debug!("{} ({address}) timed out after {probe_timeout:?}", target.name);
                Status::Down
            }
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

    async fn closed_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    }

    #[tokio::test]
    async fn tcp_probe_should_find_listening_port() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port: u16 = listener.local_addr().unwrap().port();

        let target = Target::new("backend", "127.0.0.1", port);
        assert_eq!(TcpProbe.probe(&target, PROBE_TIMEOUT).await, Status::Up);
    }

    #[tokio::test]
    async fn tcp_probe_should_report_refused_port_as_down() {
        let target = Target::new("frontend", "127.0.0.1", closed_port().await);
        assert_eq!(TcpProbe.probe(&target, PROBE_TIMEOUT).await, Status::Down);
    }

    #[tokio::test]
    async fn tcp_probe_should_report_unresolvable_host_as_down() {
        let target = Target::new("redis", "no-such-host.invalid", 6379);
        assert_eq!(TcpProbe.probe(&target, PROBE_TIMEOUT).await, Status::Down);
    }

    #[tokio::test]
    #[ignore]
    async fn tcp_probe_should_find_known_open_port() {
        let target = Target::new("cloudflare", "1.1.1.1", 443);
        assert_eq!(TcpProbe.probe(&target, PROBE_TIMEOUT).await, Status::Up);
    }
}
