//! Airflow MCP server - main entry point.
//!
//! Registers the selected Airflow API categories as MCP tools and serves
//! them over the chosen transport:
//! - stdio: JSON-RPC on stdin/stdout (default)
//! - http: streamable HTTP on `--host`:`--port`
//! - sse: deprecated legacy SSE protocol at `/sse`

use clap::Parser;
use std::time::Duration;

use airflow_mcp::airflow::AirflowClient;
use airflow_mcp::server::{self, AirflowMcpServer};
use airflow_mcp::tools::{setup_tools, AirflowCapabilities, SelectionRequest};
use airflow_mcp::types::{
    AirflowConfig, ApiCategory, ApiVersion, Config, ObservabilityConfig, ServerConfig, Transport,
    DEFAULT_AIRFLOW_HOST, DEFAULT_HOST, DEFAULT_PORT,
};

#[derive(Parser, Debug)]
#[command(
    name = "airflow-mcp",
    version,
    about = "MCP server for Apache Airflow"
)]
struct Cli {
    /// Port for the sse / http transports
    #[arg(long, env = "MCP_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Transport type
    #[arg(long, env = "MCP_TRANSPORT", value_enum, default_value_t = Transport::Stdio)]
    transport: Transport,

    /// Sets the host for running MCP
    #[arg(long, env = "MCP_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// APIs to run, default is all (repeatable)
    #[arg(long = "apis", value_enum)]
    apis: Vec<ApiCategory>,

    /// Only expose read-only tools (GET operations, no CREATE/UPDATE/DELETE)
    #[arg(long)]
    read_only: bool,

    /// Airflow webserver URL
    #[arg(long, env = "AIRFLOW_HOST", default_value = DEFAULT_AIRFLOW_HOST)]
    airflow_host: String,

    /// Airflow REST API version
    #[arg(long, env = "AIRFLOW_API_VERSION", value_enum, default_value_t = ApiVersion::V1)]
    airflow_api_version: ApiVersion,

    /// Airflow basic auth user
    #[arg(long, env = "AIRFLOW_USERNAME")]
    airflow_username: Option<String>,

    /// Airflow basic auth password
    #[arg(long, env = "AIRFLOW_PASSWORD", hide_env_values = true)]
    airflow_password: Option<String>,

    /// Airflow bearer token, preferred over basic auth
    #[arg(long, env = "AIRFLOW_JWT_TOKEN", hide_env_values = true)]
    airflow_jwt_token: Option<String>,

    /// Timeout for each Airflow request, in seconds
    #[arg(long, env = "AIRFLOW_TIMEOUT_SECS", default_value_t = 30)]
    airflow_timeout_secs: u64,
}

impl Cli {
    fn into_parts(self) -> (Config, SelectionRequest) {
        let config = Config {
            server: ServerConfig {
                host: self.host,
                port: self.port,
                transport: self.transport,
            },
            airflow: AirflowConfig {
                host: self.airflow_host,
                api_version: self.airflow_api_version,
                username: self.airflow_username,
                password: self.airflow_password,
                jwt_token: self.airflow_jwt_token,
                request_timeout: Duration::from_secs(self.airflow_timeout_secs),
            },
            observability: ObservabilityConfig::default(),
        };
        (config, SelectionRequest::new(self.apis, self.read_only))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, selection) = Cli::parse().into_parts();

    airflow_mcp::observability::init_tracing(&config.observability);
    tracing::debug!(?config, "Loaded configuration");

    let client = AirflowClient::new(config.airflow.clone())?;
    let mut mcp = AirflowMcpServer::new();

    // Provider failures abort here, before any transport starts
    setup_tools(
        &mut mcp,
        &AirflowCapabilities,
        &client,
        selection.apis(),
        selection.read_only(),
    )?;

    let transport = config.server.transport.configure();
    server::run(mcp, transport, &config.server).await?;

    Ok(())
}
