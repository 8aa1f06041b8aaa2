//! Animal registry API handlers.
//!
//! ```text
//! GET    /api/animals?species=Velociraptor&minimumAge=5
//! GET    /api/animals/{id}
//! POST   /api/animals {"name":"Dino","species":"Velociraptor","age":7}
//! PUT    /api/animals/{id}
//! DELETE /api/animals/{id}
//! ```

use actix_web::{HttpResponse, delete, get, http::header, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::{
    Animal, AnimalDraft, AnimalFilter, AnimalPersistenceError, AnimalValidationError,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::models::Error;

/// Query parameters accepted by `GET /api/animals`.
///
/// All parameters are optional; criteria combine with logical AND.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AnimalQuery {
    /// Exact species match, case-insensitive.
    pub species: Option<String>,
    /// Exact name match, case-insensitive.
    pub name: Option<String>,
    /// Inclusive lower bound on age in years.
    pub minimum_age: Option<i32>,
}

impl From<AnimalQuery> for AnimalFilter {
    fn from(query: AnimalQuery) -> Self {
        let mut filter = AnimalFilter::default();
        if let Some(species) = query.species {
            filter = filter.with_species(species);
        }
        if let Some(name) = query.name {
            filter = filter.with_name(name);
        }
        if let Some(minimum_age) = query.minimum_age {
            filter = filter.with_minimum_age(minimum_age);
        }
        filter
    }
}

/// Request body for creating or replacing an animal.
///
/// Example JSON: `{"name":"Dino","species":"Velociraptor","age":7}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnimalRequest {
    /// Individual name.
    #[schema(example = "Dino")]
    pub name: String,
    /// Species designation.
    #[schema(example = "Velociraptor")]
    pub species: String,
    /// Age in years.
    #[schema(example = 7)]
    pub age: i32,
}

impl TryFrom<AnimalRequest> for AnimalDraft {
    type Error = AnimalValidationError;

    fn try_from(value: AnimalRequest) -> Result<Self, Self::Error> {
        Self::new(value.name, value.species, value.age)
    }
}

/// Animal representation returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnimalResponse {
    /// Unique identifier.
    pub id: Uuid,
    /// Individual name.
    #[schema(example = "Dino")]
    pub name: String,
    /// Species designation.
    #[schema(example = "Velociraptor")]
    pub species: String,
    /// Age in years.
    #[schema(example = 7)]
    pub age: i32,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Animal> for AnimalResponse {
    fn from(animal: Animal) -> Self {
        Self {
            id: animal.id,
            name: animal.name,
            species: animal.species,
            age: animal.age,
            created_at: animal.created_at,
            updated_at: animal.updated_at,
        }
    }
}

fn map_persistence_error(err: AnimalPersistenceError) -> Error {
    // Log the adapter detail, hand the client a stable payload.
    error!(error = %err, "animal repository failure");
    match err {
        AnimalPersistenceError::Connection { .. } => {
            Error::service_unavailable("database unavailable")
        }
        AnimalPersistenceError::Query { .. } => Error::internal("database query failed"),
    }
}

fn map_validation_error(err: AnimalValidationError) -> Error {
    let field = match err {
        AnimalValidationError::EmptyName | AnimalValidationError::NameTooLong => "name",
        AnimalValidationError::EmptySpecies | AnimalValidationError::SpeciesTooLong => "species",
        AnimalValidationError::NegativeAge | AnimalValidationError::ImplausibleAge => "age",
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field }))
}

/// List animals, optionally filtered by species, name, and minimum age.
#[utoipa::path(
    get,
    path = "/api/animals",
    params(AnimalQuery),
    responses(
        (status = 200, description = "Matching animals", body = [AnimalResponse]),
        (status = 503, description = "Database unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["animals"],
    operation_id = "listAnimals"
)]
#[get("/animals")]
pub async fn list_animals(
    state: web::Data<HttpState>,
    query: web::Query<AnimalQuery>,
) -> ApiResult<web::Json<Vec<AnimalResponse>>> {
    let filter = AnimalFilter::from(query.into_inner());
    let animals = state
        .animals
        .list(&filter)
        .await
        .map_err(map_persistence_error)?;
    Ok(web::Json(
        animals.into_iter().map(AnimalResponse::from).collect(),
    ))
}

/// Fetch a single animal by id.
#[utoipa::path(
    get,
    path = "/api/animals/{id}",
    params(("id" = Uuid, Path, description = "Animal identifier")),
    responses(
        (status = 200, description = "The animal", body = AnimalResponse),
        (status = 404, description = "No such animal", body = Error),
        (status = 503, description = "Database unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["animals"],
    operation_id = "getAnimal"
)]
#[get("/animals/{id}")]
pub async fn get_animal(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
) -> ApiResult<web::Json<AnimalResponse>> {
    let id = id.into_inner();
    let animal = state
        .animals
        .find(id)
        .await
        .map_err(map_persistence_error)?
        .ok_or_else(|| Error::not_found(format!("no animal with id {id}")))?;
    Ok(web::Json(AnimalResponse::from(animal)))
}

/// Register a new animal.
#[utoipa::path(
    post,
    path = "/api/animals",
    request_body = AnimalRequest,
    responses(
        (status = 201, description = "Animal created", body = AnimalResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Database unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["animals"],
    operation_id = "createAnimal"
)]
#[post("/animals")]
pub async fn create_animal(
    state: web::Data<HttpState>,
    payload: web::Json<AnimalRequest>,
) -> ApiResult<HttpResponse> {
    let draft = AnimalDraft::try_from(payload.into_inner()).map_err(map_validation_error)?;
    let animal = state
        .animals
        .create(&draft)
        .await
        .map_err(map_persistence_error)?;
    let location = format!("/api/animals/{}", animal.id);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(AnimalResponse::from(animal)))
}

/// Replace an existing animal's details.
#[utoipa::path(
    put,
    path = "/api/animals/{id}",
    params(("id" = Uuid, Path, description = "Animal identifier")),
    request_body = AnimalRequest,
    responses(
        (status = 200, description = "Animal updated", body = AnimalResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "No such animal", body = Error),
        (status = 503, description = "Database unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["animals"],
    operation_id = "updateAnimal"
)]
#[put("/animals/{id}")]
pub async fn update_animal(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
    payload: web::Json<AnimalRequest>,
) -> ApiResult<web::Json<AnimalResponse>> {
    let id = id.into_inner();
    let draft = AnimalDraft::try_from(payload.into_inner()).map_err(map_validation_error)?;
    let animal = state
        .animals
        .update(id, &draft)
        .await
        .map_err(map_persistence_error)?
        .ok_or_else(|| Error::not_found(format!("no animal with id {id}")))?;
    Ok(web::Json(AnimalResponse::from(animal)))
}

/// Remove an animal from the registry.
#[utoipa::path(
    delete,
    path = "/api/animals/{id}",
    params(("id" = Uuid, Path, description = "Animal identifier")),
    responses(
        (status = 204, description = "Animal deleted"),
        (status = 404, description = "No such animal", body = Error),
        (status = 503, description = "Database unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["animals"],
    operation_id = "deleteAnimal"
)]
#[delete("/animals/{id}")]
pub async fn delete_animal(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    let deleted = state
        .animals
        .delete(id)
        .await
        .map_err(map_persistence_error)?;
    if !deleted {
        return Err(Error::not_found(format!("no animal with id {id}")));
    }
    Ok(HttpResponse::NoContent().finish())
}
