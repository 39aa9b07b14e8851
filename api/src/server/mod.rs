//! API Server Module
//!
//! This module contains the server setup for the web shell.

use anyhow::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

use referee_core::config::ServerSettings;

use crate::browser::spawn_browser_launcher;
use crate::handlers::index;

/// Build the router: one page, nothing else
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(index))
        .layer(TraceLayer::new_for_http())
}

/// Lines printed before the server starts
pub fn startup_banner(settings: &ServerSettings) -> String {
    let rule = "=".repeat(50);
    format!(
        "🚀 Starting ML Model Referee Web Interface...\n\
         📱 Opening in your browser at: {url}\n\
         \n\
         {rule}\n\
         DEMO INSTRUCTIONS:\n\
         1. Answer the 3 questions on the web page\n\
         2. Get instant model recommendations\n\
         3. See detailed comparisons and trade-offs\n\
         {rule}\n",
        url = settings.local_url(),
    )
}

/// Main web server
pub struct ApiServer {
    /// Server configuration
    settings: ServerSettings,
}

impl ApiServer {
    /// Create a new web server
    pub fn new(settings: ServerSettings) -> Self {
        Self { settings }
    }

    /// Bind, launch the browser if configured, and serve until shutdown
    pub async fn start(&self) -> Result<()> {
        info!(
            "Starting Model Referee web server on {}:{}",
            self.settings.host, self.settings.port
        );

        let listener =
            tokio::net::TcpListener::bind((self.settings.host.as_str(), self.settings.port))
                .await
                .map_err(|e| {
                    anyhow::anyhow!(
                        "Failed to bind {}:{}: {}",
                        self.settings.host,
                        self.settings.port,
                        e
                    )
                })?;
        let addr: SocketAddr = listener.local_addr()?;
        info!("Model Referee web server listening on {}", addr);

        if self.settings.open_browser {
            spawn_browser_launcher(self.settings.local_url(), self.settings.browser_delay());
        }

        axum::serve(listener, create_router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to run web server: {}", e))?;

        info!("Model Referee web server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_banner_mentions_url() {
        let banner = startup_banner(&ServerSettings::default());
        assert!(banner.contains("http://localhost:5000"));
        assert!(banner.contains("DEMO INSTRUCTIONS:"));
    }
}
