//! Axum server bootstrap - the composition root.
//!
//! This module is the only place where the process-wide singletons are
//! created for the web adapter. Handlers never construct them; they reach
//! them through the registry held by [`AxumContext`].

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use brainnet_core::{
    DatabaseManager, HealthService, ServiceRegistry, Settings, validate_settings,
};
use tokio::net::TcpListener;
use tracing::info;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Which of the two HTTP surfaces to serve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// The generic Brain_Net API: a single status endpoint.
    Backend,
    /// The LLM service with its five mounted surfaces.
    #[default]
    Llm,
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub variant: Variant,
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Derive the server configuration from application settings.
    ///
    /// A `*` entry in the configured origins switches CORS to allow-all.
    pub fn from_settings(settings: &Settings, variant: Variant) -> Self {
        let cors = if settings.cors_origins.iter().any(|o| o == "*") {
            CorsConfig::AllowAll
        } else {
            CorsConfig::AllowOrigins(settings.cors_origins.clone())
        };
        Self {
            host: settings.host.clone(),
            port: settings.port,
            variant,
            cors,
        }
    }

    /// Override the bind port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Override the bind host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context for the Axum adapter.
///
/// Owns the process-wide registry. Handlers and extractors only borrow from it.
#[derive(Debug)]
pub struct AxumContext {
    pub registry: ServiceRegistry,
    pub settings: Settings,
}

impl AxumContext {
    /// Wrap an already-populated registry.
    pub const fn new(registry: ServiceRegistry, settings: Settings) -> Self {
        Self { registry, settings }
    }

    /// Tear down the process-wide singletons.
    pub fn shutdown(&self) {
        match self.registry.database_manager() {
            Ok(db) => db.close_all(),
            Err(e) => tracing::warn!("Skipping database shutdown: {e}"),
        }
    }
}

/// Create the process-wide singletons and verify the registry.
pub fn bootstrap(settings: Settings) -> Result<AxumContext> {
    validate_settings(&settings).context("invalid settings")?;

    // 1. Database manager
    let db = Arc::new(DatabaseManager::new(settings.database.clone()));
    db.initialize();

    // 2. Health service over the same manager
    let health = Arc::new(HealthService::new(Arc::clone(&db)));

    // 3. Registry, checked before anything is served
    let registry = ServiceRegistry::new().with_database(db).with_health(health);
    registry.verify()?;

    info!(
        target: "brainnet.bootstrap",
        app_name = %settings.app_name,
        debug = settings.debug,
        "Application state ready"
    );

    Ok(AxumContext::new(registry, settings))
}

/// Bootstrap, serve until Ctrl-C or SIGTERM, then close the shared handles.
pub async fn start_server(config: ServerConfig, settings: Settings) -> Result<()> {
    let ctx = Arc::new(bootstrap(settings)?);

    let app = crate::routes::build_root_router(config.variant, Arc::clone(&ctx), &config.cors)?;

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    match config.variant {
        Variant::Llm => info!("Brain_Net LLM service listening on http://{}", addr),
        Variant::Backend => info!("Brain_Net API listening on http://{}", addr),
    }

    serve_until(listener, app, &ctx, shutdown_signal()).await
}

/// Serve `app` until `shutdown` resolves. The context is torn down whether
/// serving ends cleanly or with an error.
async fn serve_until<F>(
    listener: TcpListener,
    app: Router,
    ctx: &AxumContext,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await;

    ctx.shutdown();
    info!("Server shut down");
    served.context("server error")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down..."),
        () = terminate => info!("Received SIGTERM, shutting down..."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brainnet_core::CoreError;

    #[test]
    fn test_bootstrap_fills_registry() {
        let ctx = bootstrap(Settings::default()).unwrap();

        assert!(ctx.registry.verify().is_ok());
        let db = ctx.registry.database_manager().unwrap();
        assert!(db.is_initialized());
        assert!(Arc::ptr_eq(
            ctx.registry.health_service().unwrap().database(),
            &db
        ));

        ctx.shutdown();
        assert!(!db.is_initialized());
    }

    #[test]
    fn test_bootstrap_rejects_invalid_settings() {
        let settings = Settings {
            port: 80,
            ..Default::default()
        };
        assert!(bootstrap(settings).is_err());
    }

    #[test]
    fn test_shutdown_without_database_is_harmless() {
        let ctx = AxumContext::new(ServiceRegistry::new(), Settings::default());
        ctx.shutdown();
        assert!(matches!(
            ctx.registry.database_manager(),
            Err(CoreError::MissingState("db_manager"))
        ));
    }

    #[tokio::test]
    async fn test_serve_until_closes_database() {
        let ctx = bootstrap(Settings::default()).unwrap();
        let db = ctx.registry.database_manager().unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let app = Router::new().route("/", axum::routing::get(|| async { "ok" }));

        serve_until(listener, app, &ctx, async {}).await.unwrap();

        assert!(!db.is_initialized());
    }

    #[test]
    fn test_server_config_from_settings() {
        let settings = Settings::default();
        let config = ServerConfig::from_settings(&settings, Variant::Backend).with_port(9000);

        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(
            config.cors,
            CorsConfig::AllowOrigins(settings.cors_origins.clone())
        );

        let open = Settings {
            cors_origins: vec!["*".to_string()],
            ..Default::default()
        };
        assert_eq!(
            ServerConfig::from_settings(&open, Variant::Llm).cors,
            CorsConfig::AllowAll
        );
    }
}
