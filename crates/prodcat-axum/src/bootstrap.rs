//! Server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together:
//! configuration is read from the environment once, the repository
//! backend is selected and connected, and the server is started.

use anyhow::{Context, Result};

use prodcat_core::Info;
use prodcat_store::{StoreFactory, binding};

use crate::state::AppContext;

/// Default port when the platform does not assign one.
const DEFAULT_PORT: u16 = 4567;

/// Status message reported at the root route.
const STATUS_MESSAGE: &str = "I am awesome!";

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Credentials for the external store; `None` selects the in-memory
    /// backend.
    pub binding: Option<binding::StoreCredentials>,
    /// Optional mode string reported in the info payload.
    pub app_mode: Option<String>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// `PORT` overrides the default port. The presence of a
    /// `VCAP_SERVICES` service-binding descriptor selects the Redis
    /// backend; a descriptor that is set but unusable is a hard error,
    /// the process must not start against a half-configured store.
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let binding = match std::env::var("VCAP_SERVICES") {
            Ok(descriptor) => Some(
                binding::parse(&descriptor)
                    .context("VCAP_SERVICES is set but holds no usable redis credentials")?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            port,
            binding,
            app_mode: std::env::var("APP_MODE").ok(),
            cors: CorsConfig::default(),
        })
    }
}

/// Build the application context for the configured backend.
///
/// Connecting the external store happens here, once; a failure aborts
/// startup before the server binds its port.
pub async fn bootstrap(config: &ServerConfig) -> Result<AppContext> {
    let products = match &config.binding {
        Some(credentials) => {
            tracing::info!(host = %credentials.host, "Using Redis product store");
            StoreFactory::redis(credentials).await?
        }
        None => {
            tracing::info!("Using in-memory product store");
            StoreFactory::in_memory()
        }
    };

    let info = Info::new(
        STATUS_MESSAGE,
        env!("CARGO_PKG_VERSION"),
        config.app_mode.clone(),
    );

    Ok(AppContext { products, info })
}

/// Start the web server on the configured port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("prodcat listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
