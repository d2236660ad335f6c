//! Local preview server. Every request re-renders the page, so edits to the
//! config file show up on reload.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::output::{DOWNLOAD_FILE_NAME, HTML_MIME};

pub const DEFAULT_PREVIEW_ADDR: &str = "127.0.0.1:8080";

pub type RenderFn = Arc<dyn Fn() -> Result<String, String> + Send + Sync>;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("failed to bind preview server on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("preview server failed: {source}")]
    Serve {
        #[source]
        source: std::io::Error,
    },
}

pub fn router(render: RenderFn) -> Router {
    Router::new()
        .route("/", get(handle_page))
        .route(&format!("/{DOWNLOAD_FILE_NAME}"), get(handle_download))
        .route("/healthz", get(|| async { "ok" }))
        .with_state(render)
}

async fn handle_page(State(render): State<RenderFn>) -> Response {
    match render() {
        Ok(html) => {
            debug!(bytes = html.len(), "preview rendered");
            ([(header::CONTENT_TYPE, HTML_MIME.to_string())], html).into_response()
        }
        Err(e) => render_failed(e),
    }
}

async fn handle_download(State(render): State<RenderFn>) -> Response {
    match render() {
        Ok(html) => {
            let disposition = format!("attachment; filename=\"{DOWNLOAD_FILE_NAME}\"");
            (
                [
                    (header::CONTENT_TYPE, HTML_MIME.to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                html,
            )
                .into_response()
        }
        Err(e) => render_failed(e),
    }
}

fn render_failed(message: String) -> Response {
    warn!(error = %message, "preview render failed");
    (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
}

/// Serve the preview until Ctrl-C.
pub async fn serve(addr: SocketAddr, render: RenderFn) -> Result<(), PreviewError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| PreviewError::Bind { addr, source })?;
    let bound = listener
        .local_addr()
        .map_err(|source| PreviewError::Bind { addr, source })?;

    info!(%bound, "preview server listening");
    eprintln!(":: Preview   : http://{bound}/");
    eprintln!(":: Download  : http://{bound}/{DOWNLOAD_FILE_NAME}");

    axum::serve(listener, router(render))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .map_err(|source| PreviewError::Serve { source })?;

    debug!("preview server shut down");
    Ok(())
}
