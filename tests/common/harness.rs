//! Test server harness.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use trustlens::{AppState, MockLedgerSink, MockOracle, create_router};

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

pub struct TestServer {
    pub addr: SocketAddr,
    pub oracle: Arc<MockOracle>,
    pub ledger: Arc<MockLedgerSink>,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// A bare router served on an ephemeral port, e.g. a stub ledger node.
pub struct StubServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl StubServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => tokio::time::sleep(interval).await,
        }
    }
}

async fn serve(
    router: Router,
) -> Result<(SocketAddr, JoinHandle<()>, oneshot::Sender<()>), ServerStartupError> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await;
    });

    wait_for_server_ready(
        addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok((addr, handle, shutdown_tx))
}

/// Spawns the TrustLens router with a mock oracle and mock ledger.
pub async fn spawn_test_server(
    oracle: MockOracle,
    ledger: MockLedgerSink,
) -> Result<TestServer, ServerStartupError> {
    let oracle = Arc::new(oracle);
    let ledger = Arc::new(ledger);
    let router = create_router(AppState::new(oracle.clone(), ledger.clone()));

    let (addr, handle, shutdown_tx) = serve(router).await?;

    Ok(TestServer {
        addr,
        oracle,
        ledger,
        _server_handle: handle,
        shutdown_tx: Some(shutdown_tx),
    })
}

pub async fn spawn_stub(router: Router) -> Result<StubServer, ServerStartupError> {
    let (addr, handle, shutdown_tx) = serve(router).await?;

    Ok(StubServer {
        addr,
        _server_handle: handle,
        shutdown_tx: Some(shutdown_tx),
    })
}
