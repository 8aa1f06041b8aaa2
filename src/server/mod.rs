//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::{AppSettings, Environment, SettingsError};

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Condition;
use actix_web::{App, HttpServer, web};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::ApiDoc;
use crate::domain::{AnimalRepository, InMemoryAnimalRepository};
use crate::inbound::http::animals::{
    create_animal, delete_animal, get_animal, list_animals, update_animal,
};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::middleware::HttpsRedirect;
use crate::outbound::persistence::DieselAnimalRepository;

/// Dependency bundle consumed by [`build_app`].
#[derive(Clone)]
pub struct AppDependencies {
    /// Shared readiness state for the health probes.
    pub health_state: web::Data<HealthState>,
    /// Port bundle consumed by the HTTP handlers.
    pub http_state: web::Data<HttpState>,
    /// Runtime environment; decides docs-vs-redirect behaviour.
    pub environment: Environment,
    /// Single origin permitted by the CORS policy.
    pub allowed_origin: String,
}

/// Assemble the Actix application.
///
/// The shape mirrors the bootstrap contract: CORS for one configured
/// origin with any method and header, interactive API docs only in
/// development, and a redirect to encrypted transport everywhere else.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        environment,
        allowed_origin,
    } = deps;

    let cors = Cors::default()
        .allowed_origin(&allowed_origin)
        .allow_any_method()
        .allow_any_header();

    let api = web::scope("/api")
        .service(list_animals)
        .service(get_animal)
        .service(create_animal)
        .service(update_animal)
        .service(delete_animal);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(cors)
        .wrap(Condition::new(
            !environment.is_development(),
            HttpsRedirect,
        ))
        .service(api)
        .service(ready)
        .service(live);

    if environment.is_development() {
        app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
    } else {
        app
    }
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// The animal repository is database-backed when a pool is attached and
/// in-memory otherwise.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let repository: Arc<dyn AnimalRepository> = match &config.db_pool {
        Some(pool) => Arc::new(DieselAnimalRepository::new(pool.clone())),
        None => Arc::new(InMemoryAnimalRepository::new()),
    };
    let http_state = web::Data::new(HttpState::new(repository));

    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        environment,
        allowed_origin,
        db_pool: _,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            environment,
            allowed_origin: allowed_origin.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
