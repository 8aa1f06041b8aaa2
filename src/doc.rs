//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the animal registry endpoints and health probes
//! - **Schemas**: request/response DTOs and the shared error payload
//!
//! The generated specification backs Swagger UI, which the server mounts
//! only when running in the development environment.

use utoipa::OpenApi;

use crate::inbound::http::animals::{AnimalRequest, AnimalResponse};
use crate::models::{Error, ErrorCode};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cretaceous API",
        description = "Animal registry for a Cretaceous-era wildlife park.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::animals::list_animals,
        crate::inbound::http::animals::get_animal,
        crate::inbound::http::animals::create_animal,
        crate::inbound::http::animals::update_animal,
        crate::inbound::http::animals::delete_animal,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(AnimalRequest, AnimalResponse, Error, ErrorCode)),
    tags(
        (name = "animals", description = "Operations on the animal registry"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI path registration and schema field structure.

    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_registers_animal_and_health_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/animals",
            "/api/animals/{id}",
            "/health/ready",
            "/health/live",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "document should register {path}"
            );
        }
    }

    #[test]
    fn openapi_animal_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let animal = schemas.get("AnimalResponse").expect("AnimalResponse schema");

        for field in ["id", "name", "species", "age", "createdAt", "updatedAt"] {
            assert_object_schema_has_field(animal, field);
        }
    }

    #[test]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error = schemas.get("Error").expect("Error schema");

        assert_object_schema_has_field(error, "code");
        assert_object_schema_has_field(error, "message");
    }
}
