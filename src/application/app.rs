use crate::api::ShowcaseService;
use crate::application::Aggregator;
use crate::config::Settings;
use crate::providers::{google_play::GooglePlayStore, AppStore};
use crate::{Error, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, instrument};

/// Main application struct that coordinates all components
pub struct Application {
    settings: Settings,
    aggregator: Aggregator,
}

impl Application {
    /// Wire up the Google Play store from loaded settings
    pub fn from_settings(settings: Settings) -> Result<Self> {
        info!(base_url = %settings.upstream.base_url, "Using Google Play upstream");
        let store = GooglePlayStore::new(&settings.upstream)?;
        Self::with_store(settings, Arc::new(store))
    }

    /// Wire the application around any store implementation
    pub fn with_store(settings: Settings, store: Arc<dyn AppStore>) -> Result<Self> {
        let catalog = settings.catalog_config()?;
        let aggregator = Aggregator::new(store, catalog);
        Ok(Self {
            settings,
            aggregator,
        })
    }

    /// Router with every route and the middleware stack applied
    pub fn router(&self) -> Router {
        ShowcaseService::new(self.aggregator.clone()).into_router()
    }

    /// Serve until ctrl-c or SIGTERM
    #[instrument(skip(self))]
    pub async fn run(self) -> Result<()> {
        let address = self.settings.bind_address();
        let listener = TcpListener::bind(&address).await?;

        info!(
            address = %listener.local_addr()?,
            developer_id = %self.aggregator.catalog().developer_id,
            "Starting app showcase server"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| Error::application(format!("server error: {e}")))?;

        info!("Server stopped");
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Received shutdown signal");
}
