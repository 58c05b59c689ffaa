//! HTTP server lifecycle: build, run in the background, close.

use std::io;
use std::net::SocketAddr;

use actix_web::dev::{Server, ServerHandle};
use actix_web::{App, HttpServer, web};
use tokio::task::JoinHandle;
use tracing_actix_web::TracingLogger;

use crate::config::AppConfig;
use crate::handlers;
use crate::observability::RequestIdMiddleware;
use crate::state::AppState;

/// Bind the server described by `config`.
///
/// Returns the not-yet-started server and the addresses it bound, which
/// matters when `config.port` is 0.
pub fn build_server(config: &AppConfig, state: AppState) -> io::Result<(Server, Vec<SocketAddr>)> {
    let data = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .app_data(data.clone())
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?;

    let addrs = server.addrs();
    Ok((server.run(), addrs))
}

/// A server running on a background task.
pub struct RunningServer {
    addr: SocketAddr,
    handle: ServerHandle,
    task: JoinHandle<io::Result<()>>,
}

/// Start the server in the background and return once it is bound.
pub async fn run_server(config: &AppConfig, state: AppState) -> io::Result<RunningServer> {
    let (server, addrs) = build_server(config, state)?;
    let addr = addrs.first().copied().ok_or_else(|| {
        io::Error::new(io::ErrorKind::AddrNotAvailable, "server bound no address")
    })?;

    let handle = server.handle();
    let task = tokio::spawn(server);
    tracing::info!(%addr, "Blog API listening");

    Ok(RunningServer { addr, handle, task })
}

impl RunningServer {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Absolute URL of `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Stop accepting connections, drain in-flight requests and wait for
    /// the server task to finish.
    pub async fn close(self) -> io::Result<()> {
        tracing::info!(addr = %self.addr, "Closing Blog API server");
        self.handle.stop(true).await;
        self.task.await.map_err(io::Error::other)?
    }
}
