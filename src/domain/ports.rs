//! Domain ports for the animal registry.
//!
//! Ports describe how the domain expects to interact with driven adapters.
//! The repository trait exposes strongly typed errors so adapters map their
//! failures into predictable variants instead of returning `anyhow::Result`.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use super::{Animal, AnimalDraft, AnimalFilter};

/// Errors surfaced by a persistence adapter for the animal registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimalPersistenceError {
    /// Database connectivity or checkout failures.
    #[error("animal persistence connection failed: {message}")]
    Connection { message: String },
    /// Query execution failures that bubble up from the adapter.
    #[error("animal persistence query failed: {message}")]
    Query { message: String },
}

impl AnimalPersistenceError {
    /// Helper for connection related adapter errors.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Storage port for animal records.
///
/// `update` and `delete` report absence through their return value rather
/// than an error variant; handlers turn that into a 404.
#[async_trait]
pub trait AnimalRepository: Send + Sync {
    /// List animals satisfying `filter`, ordered by name.
    async fn list(&self, filter: &AnimalFilter) -> Result<Vec<Animal>, AnimalPersistenceError>;

    /// Fetch one animal by id.
    async fn find(&self, id: Uuid) -> Result<Option<Animal>, AnimalPersistenceError>;

    /// Persist a new animal and return the stored record.
    async fn create(&self, draft: &AnimalDraft) -> Result<Animal, AnimalPersistenceError>;

    /// Replace an existing animal's content; `None` when `id` is unknown.
    async fn update(
        &self,
        id: Uuid,
        draft: &AnimalDraft,
    ) -> Result<Option<Animal>, AnimalPersistenceError>;

    /// Delete an animal; `false` when `id` is unknown.
    async fn delete(&self, id: Uuid) -> Result<bool, AnimalPersistenceError>;
}

/// In-memory [`AnimalRepository`] used by tests and no-database setups.
#[derive(Debug, Default)]
pub struct InMemoryAnimalRepository {
    animals: Mutex<Vec<Animal>>,
}

impl InMemoryAnimalRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Animal>> {
        // Mutex poisoning only happens if a holder panicked; the stored
        // Vec is still structurally sound, so keep serving.
        self.animals
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl AnimalRepository for InMemoryAnimalRepository {
    async fn list(&self, filter: &AnimalFilter) -> Result<Vec<Animal>, AnimalPersistenceError> {
        let mut matches: Vec<Animal> = self
            .lock()
            .iter()
            .filter(|animal| filter.matches(animal))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(matches)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Animal>, AnimalPersistenceError> {
        Ok(self.lock().iter().find(|animal| animal.id == id).cloned())
    }

    async fn create(&self, draft: &AnimalDraft) -> Result<Animal, AnimalPersistenceError> {
        let now = Utc::now();
        let animal = Animal {
            id: Uuid::new_v4(),
            name: draft.name().to_owned(),
            species: draft.species().to_owned(),
            age: draft.age(),
            created_at: now,
            updated_at: now,
        };
        self.lock().push(animal.clone());
        Ok(animal)
    }

    async fn update(
        &self,
        id: Uuid,
        draft: &AnimalDraft,
    ) -> Result<Option<Animal>, AnimalPersistenceError> {
        let mut animals = self.lock();
        let Some(animal) = animals.iter_mut().find(|animal| animal.id == id) else {
            return Ok(None);
        };
        animal.name = draft.name().to_owned();
        animal.species = draft.species().to_owned();
        animal.age = draft.age();
        animal.updated_at = Utc::now();
        Ok(Some(animal.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AnimalPersistenceError> {
        let mut animals = self.lock();
        let before = animals.len();
        animals.retain(|animal| animal.id != id);
        Ok(animals.len() < before)
    }
}
