//! HTTP server lifecycle with graceful shutdown.

use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::info;

use crate::error::{Error, Result};

/// Handle to a running server.
///
/// Owned by the composition root; there is no global instance. Dropping the
/// handle without calling [`ServerHandle::stop`] aborts nothing, so callers
/// that care about clean shutdown must stop explicitly.
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

impl ServerHandle {
    /// The bound address, with the OS-assigned port when port 0 was requested.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Stop accepting connections and wait for in-flight requests to finish.
    ///
    /// Consumes the handle, so stop resolves exactly once. Returns only after
    /// the serve task has exited and the listener is released.
    pub async fn stop(self) -> Result<()> {
        // The receiver is gone if the serve task already exited; shutdown
        // still completes through the join below.
        let _ = self.shutdown_tx.send(());
        match self.task.await {
            Ok(Ok(())) => {
                info!("server stopped");
                Ok(())
            }
            Ok(Err(e)) => Err(Error::Serve(e)),
            Err(e) => Err(Error::Shutdown(e)),
        }
    }
}

/// Bind the listener and start serving `app`.
///
/// Port 0 requests an OS-assigned ephemeral port; the actual port is exposed
/// on the returned handle. Resolves exactly once, with either a handle or a
/// descriptive bind failure.
pub async fn start(app: Router, port: u16) -> Result<ServerHandle> {
    let listener = TcpListener::bind(("127.0.0.1", port))
        .await
        .map_err(Error::Bind)?;
    let addr = listener.local_addr().map_err(Error::Bind)?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let task = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await
    });

    info!("server listening on {}", addr);
    Ok(ServerHandle {
        addr,
        shutdown_tx,
        task,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::AppMetrics;
    use crate::routes::create_router;
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    fn test_app() -> Router {
        create_router(Arc::new(AppMetrics::new()))
    }

    #[tokio::test]
    async fn test_start_assigns_ephemeral_port() {
        let handle = start(test_app(), 0).await.unwrap();
        assert_ne!(handle.port(), 0);
        handle.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_health_served_over_real_socket() {
        let handle = start(test_app(), 0).await.unwrap();

        let mut stream = TcpStream::connect(handle.addr()).await.unwrap();
        stream
            .write_all(b"GET /health HTTP/1.1\r\nhost: localhost\r\nconnection: close\r\n\r\n")
            .await
            .unwrap();

        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.contains("\"status\":\"OK\""));

        handle.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_stop_releases_the_port() {
        let handle = start(test_app(), 0).await.unwrap();
        let addr = handle.addr();
        handle.stop().await.unwrap();

        assert!(TcpStream::connect(addr).await.is_err());
    }
}
