//! Policy service binary
//!
//! # Usage
//!
//! ```bash
//! POLICY_QUOTING_SERVICE_URL=http://localhost:8081/quotations cargo run --bin policy-service
//! ```
//!
//! # Environment Variables
//!
//! * `POLICY_HOST` - Server host (default: 0.0.0.0)
//! * `POLICY_PORT` - Server port (default: 8080)
//! * `POLICY_STORAGE` - `memory` or `postgres` (default: memory)
//! * `POLICY_DATABASE_URL` - PostgreSQL connection string
//! * `POLICY_QUOTING_SERVICE_URL` - Quotation collection URL of the quoting service
//! * `POLICY_QUOTING_SERVICE_TIMEOUT_SECS` - Lookup timeout (default: 10)
//! * `POLICY_TIMEZONE` - IANA timezone for expiry and activity checks (default: UTC)

use interface_api::{
    bootstrap,
    config::{ServiceConfig, ServiceKind},
    create_policy_router,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServiceConfig::load(ServiceKind::Policy)?;
    bootstrap::init_tracing(&config);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        quoting_service_url = %config.quoting_service_url,
        "Starting policy service"
    );

    let state = bootstrap::build_policy_state(&config).await?;
    bootstrap::serve(&config, create_policy_router(state)).await
}
