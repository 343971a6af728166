//! TripMates backend library modules.
//!
//! The crate is organised hexagonally: `domain` holds entities, validation,
//! and the service implementations behind driving ports; `outbound` holds the
//! PostgreSQL adapter; `inbound` holds the actix-web REST adapter.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Tracing middleware attaching a request-scoped trace identifier.
pub use middleware::Trace;
