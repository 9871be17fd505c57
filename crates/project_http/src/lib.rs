//! HTTP adapter for the project tracker core.
//!
//! # Responsibility
//! - Expose project use-cases as a JSON REST API.
//! - Keep transport concerns (status codes, CORS, wire shapes) out of core.
//!
//! # Routes
//! - `GET /health`
//! - `GET|POST {prefix}/projects`
//! - `GET|PUT|DELETE {prefix}/projects/:id`

pub mod config;
pub mod cors;
pub mod dto;
pub mod error;
pub mod routes;

pub use config::{ConfigError, ServerConfig};
pub use cors::CorsPolicy;
pub use dto::ProjectDto;
pub use error::ApiError;

use axum::routing::get;
use axum::{middleware, Router};
use log::info;
use project_core::{ProjectRepository, ProjectService};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builds the full application router for `service`.
pub fn router<R: ProjectRepository + 'static>(
    service: Arc<ProjectService<R>>,
    config: &ServerConfig,
) -> Router {
    let projects = routes::project_routes(service);
    let app = Router::new().route("/health", get(routes::health));
    let app = if config.api_prefix.is_empty() {
        app.merge(projects)
    } else {
        app.nest(&config.api_prefix, projects)
    };

    let policy = Arc::new(CorsPolicy::new(config.cors_origins.iter().cloned()));
    app.layer(middleware::from_fn_with_state(policy, cors::cors_middleware))
}

/// Serves `app` on `listener` until the process receives Ctrl-C.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    info!("event=server_listen module=http status=ok addr={addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("event=server_stop module=http status=ok addr={addr}");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler the server runs until killed.
        std::future::pending::<()>().await;
    }
}
