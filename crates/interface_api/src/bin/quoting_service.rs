//! Quoting service binary
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin quoting-service
//!
//! QUOTING_PORT=9000 QUOTING_STORAGE=postgres \
//!     QUOTING_DATABASE_URL=postgres://localhost/quoting cargo run --bin quoting-service
//! ```
//!
//! # Environment Variables
//!
//! * `QUOTING_HOST` - Server host (default: 0.0.0.0)
//! * `QUOTING_PORT` - Server port (default: 8081)
//! * `QUOTING_STORAGE` - `memory` or `postgres` (default: memory)
//! * `QUOTING_DATABASE_URL` - PostgreSQL connection string
//! * `QUOTING_TIMEZONE` - IANA timezone for expiry checks (default: UTC)
//! * `QUOTING_LOG_LEVEL` / `QUOTING_LOG_FORMAT` - `info`, `pretty` by default

use interface_api::{
    bootstrap,
    config::{ServiceConfig, ServiceKind},
    create_quoting_router,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServiceConfig::load(ServiceKind::Quoting)?;
    bootstrap::init_tracing(&config);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        timezone = %config.timezone,
        "Starting quoting service"
    );

    let state = bootstrap::build_quoting_state(&config).await?;
    bootstrap::serve(&config, create_quoting_router(state)).await
}
