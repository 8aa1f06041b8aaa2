//! Cretaceous API service library.
//!
//! Animal registry for a Cretaceous-era wildlife park: a PostgreSQL-backed
//! REST API with OpenAPI documentation in development and transport
//! enforcement everywhere else.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod models;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::HttpsRedirect;
