//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::AnimalRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Storage port for the animal registry.
    pub animals: Arc<dyn AnimalRepository>,
}

impl HttpState {
    /// Construct state over a repository implementation.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use cretaceous_api::domain::InMemoryAnimalRepository;
    /// use cretaceous_api::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(InMemoryAnimalRepository::new()));
    /// ```
    pub fn new(animals: Arc<dyn AnimalRepository>) -> Self {
        Self { animals }
    }
}
