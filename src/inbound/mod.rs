//! Driving adapters: entry points through which requests reach the domain.

pub mod http;
