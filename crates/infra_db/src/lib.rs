//! Infrastructure Database Layer
//!
//! PostgreSQL persistence for both services, using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: each store implements a domain
//! port ([`QuotationStore`](domain_quoting::QuotationStore) or
//! [`PolicyStore`](domain_policy::PolicyStore)), maps rows to domain values
//! and translates [`DatabaseError`] into `PortError` at the boundary.
//!
//! # Schema
//!
//! - `quotations`: one row per quotation, read back in insertion order
//! - `policies`: one row per issued policy, owner fields flattened
//!
//! The schema lives in the workspace `migrations/` directory and is applied
//! with [`run_migrations`].
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, PostgresQuotationStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/quoting")).await?;
//! run_migrations(&pool).await?;
//! let store = PostgresQuotationStore::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;

pub use pool::{DatabasePool, create_pool, run_migrations, DatabaseConfig};
pub use error::DatabaseError;
pub use repositories::{PostgresPolicyStore, PostgresQuotationStore};
