//! Project tracker server entry point.
//!
//! # Responsibility
//! - Parse configuration from flags and `PROJECT_TRACKER_*` env vars.
//! - Initialize logging, build the in-memory store and serve HTTP.
//!
//! # Invariants
//! - One repository per process, injected into the service; no globals.

use clap::Parser;
use log::info;
use project_core::{
    default_log_level, init_logging, init_stderr_logging, InMemoryProjectRepository,
    ProjectService,
};
use project_http::config::{DEFAULT_API_PREFIX, DEFAULT_CORS_ORIGINS, DEFAULT_HOST, DEFAULT_PORT};
use project_http::ServerConfig;
use std::error::Error;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Debug, Parser)]
#[command(name = "project-server", version, about = "Project tracker REST API")]
struct Args {
    /// Interface to bind.
    #[arg(long, env = "PROJECT_TRACKER_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// TCP port to listen on.
    #[arg(long, short, env = "PROJECT_TRACKER_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Mount point for project routes. Use an empty string for none.
    #[arg(long, env = "PROJECT_TRACKER_API_PREFIX", default_value = DEFAULT_API_PREFIX)]
    api_prefix: String,

    /// Allowed browser origins, comma separated.
    #[arg(
        long = "cors-origin",
        env = "PROJECT_TRACKER_CORS_ORIGINS",
        value_delimiter = ','
    )]
    cors_origins: Vec<String>,

    /// trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long, env = "PROJECT_TRACKER_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rotating log files; stderr when unset.
    #[arg(long, env = "PROJECT_TRACKER_LOG_DIR")]
    log_dir: Option<String>,
}

impl Args {
    fn server_config(&self) -> ServerConfig {
        let cors_origins = if self.cors_origins.is_empty() {
            DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect()
        } else {
            self.cors_origins
                .iter()
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect()
        };

        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            api_prefix: self.api_prefix.trim().to_string(),
            cors_origins,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = args.log_level.as_deref().unwrap_or(default_log_level());
    match args.log_dir.as_deref() {
        Some(dir) => init_logging(level, dir)?,
        None => init_stderr_logging(level)?,
    }

    let config = args.server_config();
    config.validate()?;

    let service = Arc::new(ProjectService::new(InMemoryProjectRepository::new()));
    let app = project_http::router(service, &config);
    let listener = TcpListener::bind(config.bind_addr()).await?;

    info!(
        "event=server_start module=cli status=ok core_version={} addr={} api_prefix={} health=/health",
        project_core::core_version(),
        listener.local_addr()?,
        if config.api_prefix.is_empty() { "/" } else { config.api_prefix.as_str() },
    );

    project_http::serve(listener, app).await?;
    Ok(())
}
