//! HTTP API Layer
//!
//! REST surfaces of the two services, built on Axum:
//!
//! - **Quoting service**: `POST /quotations`, `GET /quotations`,
//!   `GET /quotations/:id`
//! - **Policy service**: `POST /policies`, `GET /policies/:id`
//!
//! Both expose `/health` and `/health/ready`.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{bootstrap, config::{ServiceConfig, ServiceKind}, create_quoting_router};
//!
//! let config = ServiceConfig::load(ServiceKind::Quoting)?;
//! let state = bootstrap::build_quoting_state(&config).await?;
//! axum::serve(listener, create_quoting_router(state)).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod state;
pub mod bootstrap;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{health, policy, quotation};
use crate::middleware::audit_middleware;

pub use state::{HealthProbes, PolicyState, QuotingState};

/// Creates the router of the quoting service
pub fn create_quoting_router(state: QuotingState) -> Router {
    let routes = Router::new()
        .route(
            "/quotations",
            post(quotation::create_quotation).get(quotation::list_quotations),
        )
        .route("/quotations/:id", get(quotation::get_quotation))
        .with_state(state.clone());

    with_common_layers(routes.merge(health_routes(state.probes)))
}

/// Creates the router of the policy service
pub fn create_policy_router(state: PolicyState) -> Router {
    let routes = Router::new()
        .route("/policies", post(policy::issue_policy))
        .route("/policies/:id", get(policy::get_policy))
        .with_state(state.clone());

    with_common_layers(routes.merge(health_routes(state.probes)))
}

fn health_routes(probes: HealthProbes) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .with_state(probes)
}

fn with_common_layers(router: Router) -> Router {
    router
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
