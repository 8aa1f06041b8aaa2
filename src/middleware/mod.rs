//! Request middleware.
//!
//! Purpose: Define middleware components for request lifecycle concerns,
//! currently transport-security enforcement.

pub mod https_redirect;

pub use https_redirect::HttpsRedirect;
