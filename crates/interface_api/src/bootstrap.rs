//! Process bootstrap shared by the service binaries
//!
//! Wires adapters into application state according to [`ServiceConfig`],
//! installs the tracing subscriber and runs the server until a shutdown
//! signal arrives.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::{Clock, HealthCheckable, SystemClock};
use domain_policy::{
    HttpQuotationLookupClient, InMemoryPolicyStore, LoggingEventNotifier, PolicyFactory,
    PolicyIssuanceOrchestrator, PolicyStore,
};
use domain_quoting::{InMemoryQuotationStore, QuotationFactory, QuotationService, QuotationStore};
use infra_db::{create_pool, run_migrations, DatabasePool, PostgresPolicyStore, PostgresQuotationStore};

use crate::config::{LogFormat, ServiceConfig, StorageBackend};
use crate::state::{HealthProbes, PolicyState, QuotingState};

/// Initializes the tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured log level.
pub fn init_tracing(config: &ServiceConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
    }
}

/// Builds the quoting service state from configuration
pub async fn build_quoting_state(config: &ServiceConfig) -> anyhow::Result<QuotingState> {
    config.validate()?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new(config.timezone));

    let (store, probe): (Arc<dyn QuotationStore>, Arc<dyn HealthCheckable>) = match config.storage {
        StorageBackend::Memory => {
            let store = Arc::new(InMemoryQuotationStore::new());
            let probe: Arc<dyn HealthCheckable> = store.clone();
            (store as Arc<dyn QuotationStore>, probe)
        }
        StorageBackend::Postgres => {
            let store = Arc::new(PostgresQuotationStore::new(connect(config).await?));
            let probe: Arc<dyn HealthCheckable> = store.clone();
            (store as Arc<dyn QuotationStore>, probe)
        }
    };
    info!(storage = ?config.storage, "Quotation store ready");

    Ok(QuotingState {
        service: QuotationService::new(store, QuotationFactory::new(clock.clone())),
        clock,
        probes: HealthProbes::new(vec![probe]),
    })
}

/// Builds the policy service state from configuration
pub async fn build_policy_state(config: &ServiceConfig) -> anyhow::Result<PolicyState> {
    config.validate()?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new(config.timezone));

    let (store, store_probe): (Arc<dyn PolicyStore>, Arc<dyn HealthCheckable>) = match config.storage {
        StorageBackend::Memory => {
            let store = Arc::new(InMemoryPolicyStore::new());
            let probe: Arc<dyn HealthCheckable> = store.clone();
            (store as Arc<dyn PolicyStore>, probe)
        }
        StorageBackend::Postgres => {
            let store = Arc::new(PostgresPolicyStore::new(connect(config).await?));
            let probe: Arc<dyn HealthCheckable> = store.clone();
            (store as Arc<dyn PolicyStore>, probe)
        }
    };

    let lookup = Arc::new(
        HttpQuotationLookupClient::new(config.quoting_client_config())
            .context("Invalid quoting service URL")?,
    );
    info!(
        storage = ?config.storage,
        quoting_service_url = %lookup.base_url(),
        "Policy adapters ready"
    );

    let lookup_probe: Arc<dyn HealthCheckable> = lookup.clone();
    let orchestrator = PolicyIssuanceOrchestrator::new(
        lookup,
        store,
        Arc::new(LoggingEventNotifier::new()),
        PolicyFactory::new(clock.clone()),
    );

    Ok(PolicyState {
        orchestrator,
        clock,
        probes: HealthProbes::new(vec![store_probe, lookup_probe]),
    })
}

async fn connect(config: &ServiceConfig) -> anyhow::Result<DatabasePool> {
    let db_config = config
        .database_config()
        .context("database_url is required when storage = \"postgres\"")?;

    let pool = create_pool(db_config).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

/// Binds the configured address and serves `app` until shutdown
pub async fn serve(config: &ServiceConfig, app: Router) -> anyhow::Result<()> {
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("Invalid server address {}", config.server_addr()))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
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
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
