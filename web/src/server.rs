use crate::error::{Error, Result};
use crate::router::define_routes;
use crate::AppState;
use axum::serve::ListenerExt;
use log::*;
use service::config::Config;
use std::io;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Serves the mock until the process is terminated.
pub async fn init_server(app_state: AppState) -> Result<()> {
    let listener = bind(app_state.config()).await?;
    let router = define_routes(app_state);

    axum::serve(listener.tap_io(disable_nagle), router)
        .await
        .map_err(Error::Serve)
}

/// A mock server running in the background of the current tokio runtime.
///
/// Meant for test harnesses: bind on port 0, point the client under test at
/// [`MockServer::base_url`], and call [`MockServer::stop`] when done.
/// Dropping the handle also asks the server to shut down.
pub struct MockServer {
    local_addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<io::Result<()>>>,
}

impl MockServer {
    /// Binds the listener and starts serving. Fails if the port is taken.
    pub async fn start(config: Config) -> Result<Self> {
        let app_state = AppState::from_config(config);
        let listener = bind(app_state.config()).await?;
        let local_addr = listener.local_addr().map_err(Error::Serve)?;
        let router = define_routes(app_state);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            axum::serve(listener.tap_io(disable_nagle), router)
                .with_graceful_shutdown(async move {
                    // A dropped sender means shut down as well
                    let _ = shutdown_rx.await;
                })
                .await
        });

        Ok(Self {
            local_addr,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Stops accepting connections, lets in-flight responses finish, and
    /// waits for the serving task to exit.
    pub async fn stop(mut self) -> Result<()> {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(());
        }

        match self.handle.take() {
            Some(handle) => match handle.await {
                Ok(served) => served.map_err(Error::Serve),
                Err(join_error) => Err(Error::Serve(io::Error::other(join_error))),
            },
            None => Ok(()),
        }
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(());
        }
    }
}

async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = format!("{}:{}", config.interface(), config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| Error::Bind {
            addr: addr.clone(),
            source,
        })?;

    if let Ok(local_addr) = listener.local_addr() {
        info!("Mock server running on port {}", local_addr.port());
    }

    Ok(listener)
}

// Frames are small and spaced out; do not let the kernel hold them back.
fn disable_nagle(tcp: &mut tokio::net::TcpStream) {
    if let Err(err) = tcp.set_nodelay(true) {
        trace!("Failed to set TCP_NODELAY on incoming connection: {err}");
    }
}
