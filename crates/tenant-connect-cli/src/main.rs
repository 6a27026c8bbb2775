//! Tenant Connect CLI - look up a tenant's connection info.
//!
//! This is the entry point for the `tenant-connect` binary. It resolves the
//! tenant behind a deployment API and prints the result as JSON.

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tenant_connect_client::{ClientConfig, HttpRequester, TenantDescriptor, TenantInfoResolver};
use tracing_subscriber::EnvFilter;

/// Placeholder printed instead of the tenant token.
const REDACTED: &str = "<redacted>";

/// Tenant Connect - resolve tenant connection info for a monitoring agent.
#[derive(Parser, Debug)]
#[command(name = "tenant-connect")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the environment API.
    #[arg(long, env = "TENANT_CONNECT_URL")]
    url: String,

    /// API token.
    #[arg(long, env = "TENANT_CONNECT_API_TOKEN", hide_env_values = true)]
    api_token: String,

    /// PaaS token used for the connection info request (defaults to the API token).
    #[arg(long, env = "TENANT_CONNECT_PAAS_TOKEN", hide_env_values = true)]
    paas_token: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Print the tenant token instead of redacting it.
    #[arg(long, default_value = "false")]
    reveal_token: bool,

    /// Enable debug logging.
    #[arg(long, default_value = "false")]
    debug: bool,
}

impl Args {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(&self.url, &self.api_token);
        config.paas_token.clone_from(&self.paas_token);
        config.timeout_seconds = self.timeout;
        config
    }
}

/// JSON document printed on success.
#[derive(Debug, Serialize)]
struct TenantOutput<'a> {
    id: &'a str,
    token: &'a str,
    endpoints: &'a [String],
    communication_endpoint: &'a str,
}

impl<'a> TenantOutput<'a> {
    fn new(tenant: &'a TenantDescriptor, reveal_token: bool) -> Self {
        Self {
            id: tenant.id(),
            token: if reveal_token { tenant.token() } else { REDACTED },
            endpoints: tenant.endpoints(),
            communication_endpoint: tenant.communication_endpoint(),
        }
    }
}

fn init_tracing(debug: bool) {
    let default_filter = if debug {
        "tenant_connect_client=debug,warn"
    } else {
        "tenant_connect_client=info,warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);

    let config = args.client_config();
    tracing::debug!(config = ?config, "Resolving tenant connection info");

    let requester = HttpRequester::new(config).context("failed to create HTTP client")?;
    let resolver = TenantInfoResolver::new(requester);

    let tenant = resolver
        .fetch()
        .await
        .context("failed to resolve tenant connection info")?;

    let output = serde_json::to_string_pretty(&TenantOutput::new(&tenant, args.reveal_token))?;
    writeln!(std::io::stdout(), "{output}")?;

    Ok(())
}
