//! Transport name normalization.

use std::fmt;

use crate::types::Transport;

/// Transport identifier understood by the MCP server run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerTransport {
    Stdio,
    /// Deprecated; still served for older clients.
    Sse,
    StreamableHttp,
}

impl ServerTransport {
    pub fn as_str(self) -> &'static str {
        match self {
            ServerTransport::Stdio => "stdio",
            ServerTransport::Sse => "sse",
            ServerTransport::StreamableHttp => "streamable-http",
        }
    }

    /// Whether the transport listens on `host:port`.
    pub fn is_network(self) -> bool {
        !matches!(self, ServerTransport::Stdio)
    }
}

impl fmt::Display for ServerTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Transport {
    /// Map the CLI transport choice to the server's transport identifier.
    ///
    /// `http` becomes `streamable-http`; `sse` passes through with a
    /// deprecation warning.
    pub fn configure(self) -> ServerTransport {
        let transport = match self {
            Transport::Stdio => ServerTransport::Stdio,
            Transport::Sse => {
                tracing::warn!("The 'sse' transport is deprecated and will be removed; use 'http' instead");
                ServerTransport::Sse
            }
            Transport::Http => ServerTransport::StreamableHttp,
        };
        tracing::debug!(transport = %transport, "Starting MCP server for Apache Airflow");
        transport
    }
}
