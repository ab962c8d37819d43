//! Core Kernel - Foundational types shared by the quoting and policy services
//!
//! This crate provides the building blocks used across all domain modules:
//! - Strongly-typed identifiers for policies and quotations
//! - Calendar helpers and an injectable clock for expiry/validity checks
//! - Port plumbing (errors, health checks) for the hexagonal architecture

pub mod temporal;
pub mod identifiers;
pub mod error;
pub mod ports;

pub use temporal::{Clock, FixedClock, SystemClock, TemporalError, Timezone, ValidPeriod, utc_today};
pub use identifiers::{PolicyId, QuotationId};
pub use error::CoreError;
pub use ports::{
    PortError, DomainPort, AdapterHealth, HealthCheckResult, HealthCheckable,
};
