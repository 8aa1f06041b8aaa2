//! Shared helpers for HTTP integration tests.

use std::sync::Arc;

use actix_web::web;

use cretaceous_api::domain::InMemoryAnimalRepository;
use cretaceous_api::inbound::http::health::HealthState;
use cretaceous_api::inbound::http::state::HttpState;
use cretaceous_api::server::{AppDependencies, Environment};

/// Origin the test apps allow by default.
pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// App dependencies over an empty in-memory repository.
pub fn deps(environment: Environment) -> AppDependencies {
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    AppDependencies {
        health_state,
        http_state: web::Data::new(HttpState::new(Arc::new(InMemoryAnimalRepository::new()))),
        environment,
        allowed_origin: ALLOWED_ORIGIN.to_owned(),
    }
}

/// Dependencies for a development-environment app.
pub fn development_deps() -> AppDependencies {
    deps(Environment::Development)
}

/// Dependencies for a production-environment app.
pub fn production_deps() -> AppDependencies {
    deps(Environment::Production)
}
