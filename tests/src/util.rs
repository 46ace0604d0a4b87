use tokio::net::TcpListener;

/// A listener on an ephemeral loopback port.
pub async fn listener() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port: u16 = listener.local_addr().unwrap().port();
    (listener, port)
}

/// A loopback port that nothing listens on.
pub async fn closed_port() -> u16 {
    let (_listener, port) = listener().await;
    port
}
