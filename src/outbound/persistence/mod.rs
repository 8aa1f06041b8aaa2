//! PostgreSQL persistence adapters.

mod diesel_animal_repository;
mod migrate;
pub mod models;
mod pool;
pub mod schema;

pub use diesel_animal_repository::DieselAnimalRepository;
pub use migrate::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
