//! Domain types and ports for the animal registry.

pub mod animal;
pub mod ports;

pub use animal::{Animal, AnimalDraft, AnimalFilter, AnimalValidationError};
pub use ports::{AnimalPersistenceError, AnimalRepository, InMemoryAnimalRepository};
