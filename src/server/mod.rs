//! MCP server: handler, transport normalization and run loops.
//!
//! `stdio` speaks JSON-RPC over stdin/stdout. `streamable-http` mounts the
//! rmcp streamable HTTP service at `/mcp`. The deprecated `sse` transport
//! serves the legacy protocol: `GET /sse` opens the event stream and clients
//! POST messages to `/messages/?sessionId=..`.

pub mod handler;
pub mod transport;

pub use handler::{AirflowMcpServer, SERVER_NAME};
pub use transport::ServerTransport;

use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpService,
};
use rmcp::ServiceExt;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::types::{Error, Result, ServerConfig};

/// Streamable HTTP endpoint.
pub const MCP_PATH: &str = "/mcp";
/// SSE event stream endpoint.
pub const SSE_PATH: &str = "/sse";
/// SSE message endpoint, announced to clients in the `endpoint` event.
pub const SSE_POST_PATH: &str = "/messages/";

/// HTTP path clients connect to first.
pub fn endpoint_path(transport: ServerTransport) -> &'static str {
    match transport {
        ServerTransport::Sse => SSE_PATH,
        _ => MCP_PATH,
    }
}

/// Serve `server` over `transport` until the client disconnects (stdio) or
/// the process is interrupted (HTTP).
pub async fn run(
    server: AirflowMcpServer,
    transport: ServerTransport,
    config: &ServerConfig,
) -> Result<()> {
    tracing::info!(
        transport = %transport,
        tools = server.catalog().len(),
        "Starting airflow-mcp"
    );

    if !transport.is_network() {
        return serve_stdio(server).await;
    }

    let http = HttpServer::new(server, config, transport);
    let cancel = http.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupt received, shutting down");
            cancel.cancel();
        }
    });
    http.serve().await
}

async fn serve_stdio(server: AirflowMcpServer) -> Result<()> {
    let running = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| Error::transport(format!("failed to start stdio transport: {}", e)))?;
    let reason = running
        .waiting()
        .await
        .map_err(|e| Error::transport(format!("stdio session aborted: {}", e)))?;
    tracing::info!(?reason, "MCP stdio session ended");
    Ok(())
}

/// HTTP server for the network transports (streamable HTTP and SSE).
#[derive(Debug)]
pub struct HttpServer {
    server: AirflowMcpServer,
    host: String,
    port: u16,
    transport: ServerTransport,
    cancel: CancellationToken,
}

impl HttpServer {
    pub fn new(server: AirflowMcpServer, config: &ServerConfig, transport: ServerTransport) -> Self {
        Self {
            server,
            host: config.host.clone(),
            port: config.port,
            transport,
            cancel: CancellationToken::new(),
        }
    }

    /// Token that stops [`HttpServer::serve`] when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Bind and serve until cancelled.
    pub async fn serve(&self) -> Result<()> {
        let listener = TcpListener::bind((self.host.as_str(), self.port)).await?;
        self.serve_on(listener).await
    }

    /// Serve on an already-bound listener until cancelled.
    pub async fn serve_on(&self, listener: TcpListener) -> Result<()> {
        let addr = listener.local_addr()?;
        let router = match self.transport {
            ServerTransport::Sse => self.sse_router(addr),
            _ => self.streamable_router(),
        };
        tracing::info!(
            transport = %self.transport,
            "MCP HTTP server listening on http://{}{}",
            addr,
            endpoint_path(self.transport)
        );

        let cancel = self.cancel.clone();
        axum::serve(listener, router)
            .with_graceful_shutdown(async move { cancel.cancelled().await })
            .await?;

        tracing::info!("MCP HTTP server shut down");
        Ok(())
    }

    /// Request graceful shutdown.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    fn streamable_router(&self) -> axum::Router {
        let server = self.server.clone();
        let service = StreamableHttpService::new(
            move || Ok(server.clone()),
            LocalSessionManager::default().into(),
            Default::default(),
        );
        axum::Router::new().nest_service(MCP_PATH, service)
    }

    // Spawns the session acceptor; sessions end with the server's token.
    fn sse_router(&self, bind: SocketAddr) -> axum::Router {
        let (sse, router) = SseServer::new(SseServerConfig {
            bind,
            sse_path: SSE_PATH.to_string(),
            post_path: SSE_POST_PATH.to_string(),
            ct: self.cancel.child_token(),
            sse_keep_alive: None,
        });
        let server = self.server.clone();
        sse.with_service(move || server.clone());
        router
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(endpoint_path(ServerTransport::StreamableHttp), "/mcp");
        assert_eq!(endpoint_path(ServerTransport::Sse), "/sse");
    }

    #[tokio::test]
    async fn test_shutdown_stops_serving() {
        for transport in [ServerTransport::StreamableHttp, ServerTransport::Sse] {
            let http = HttpServer::new(AirflowMcpServer::new(), &ServerConfig::default(), transport);
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            http.shutdown();
            tokio::time::timeout(std::time::Duration::from_secs(5), http.serve_on(listener))
                .await
                .unwrap()
                .unwrap();
        }
    }
}
