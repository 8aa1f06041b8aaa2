//! Diesel-backed [`AnimalRepository`] adapter.
//!
//! Maps pool and query failures into the domain's
//! [`AnimalPersistenceError`] variants so handlers can distinguish "the
//! database is down" (503) from "the query went wrong" (500).

use async_trait::async_trait;
use chrono::Utc;
use diesel::define_sql_function;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use super::models::{AnimalChangeset, AnimalRecord, NewAnimalRecord};
use super::pool::{DbPool, PoolError};
use super::schema::animals;
use crate::domain::{Animal, AnimalDraft, AnimalFilter, AnimalPersistenceError, AnimalRepository};

define_sql_function! {
    /// PostgreSQL `lower()`, used for case-insensitive filter matches.
    fn lower(x: diesel::sql_types::Text) -> diesel::sql_types::Text;
}

/// Animal repository backed by the PostgreSQL pool.
#[derive(Clone)]
pub struct DieselAnimalRepository {
    pool: DbPool,
}

impl DieselAnimalRepository {
    /// Create a repository on top of an established pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl From<PoolError> for AnimalPersistenceError {
    fn from(err: PoolError) -> Self {
        match err {
            PoolError::Checkout { message } | PoolError::Build { message } => {
                AnimalPersistenceError::connection(message)
            }
            PoolError::Probe { message } => AnimalPersistenceError::query(message),
        }
    }
}

fn map_query_error(err: diesel::result::Error) -> AnimalPersistenceError {
    AnimalPersistenceError::query(err.to_string())
}

#[async_trait]
impl AnimalRepository for DieselAnimalRepository {
    async fn list(&self, filter: &AnimalFilter) -> Result<Vec<Animal>, AnimalPersistenceError> {
        let mut conn = self.pool.get().await?;

        let mut query = animals::table
            .select(AnimalRecord::as_select())
            .into_boxed();
        if let Some(species) = filter.species() {
            query = query.filter(lower(animals::species).eq(species.to_lowercase()));
        }
        if let Some(name) = filter.name() {
            query = query.filter(lower(animals::name).eq(name.to_lowercase()));
        }
        if let Some(minimum_age) = filter.minimum_age() {
            query = query.filter(animals::age.ge(minimum_age));
        }

        let rows = query
            .order(animals::name.asc())
            .load::<AnimalRecord>(&mut conn)
            .await
            .map_err(map_query_error)?;
        Ok(rows.into_iter().map(Animal::from).collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Animal>, AnimalPersistenceError> {
        let mut conn = self.pool.get().await?;

        let row = animals::table
            .find(id)
            .select(AnimalRecord::as_select())
            .first::<AnimalRecord>(&mut conn)
            .await
            .optional()
            .map_err(map_query_error)?;
        Ok(row.map(Animal::from))
    }

    async fn create(&self, draft: &AnimalDraft) -> Result<Animal, AnimalPersistenceError> {
        let mut conn = self.pool.get().await?;

        let record = NewAnimalRecord {
            id: Uuid::new_v4(),
            name: draft.name(),
            species: draft.species(),
            age: draft.age(),
        };
        let row = diesel::insert_into(animals::table)
            .values(&record)
            .returning(AnimalRecord::as_returning())
            .get_result::<AnimalRecord>(&mut conn)
            .await
            .map_err(map_query_error)?;
        Ok(Animal::from(row))
    }

    async fn update(
        &self,
        id: Uuid,
        draft: &AnimalDraft,
    ) -> Result<Option<Animal>, AnimalPersistenceError> {
        let mut conn = self.pool.get().await?;

        let row = diesel::update(animals::table.find(id))
            .set(&AnimalChangeset {
                name: draft.name(),
                species: draft.species(),
                age: draft.age(),
                updated_at: Utc::now(),
            })
            .returning(AnimalRecord::as_returning())
            .get_result::<AnimalRecord>(&mut conn)
            .await
            .optional()
            .map_err(map_query_error)?;
        Ok(row.map(Animal::from))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AnimalPersistenceError> {
        let mut conn = self.pool.get().await?;

        let deleted = diesel::delete(animals::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_query_error)?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Error mapping between the pool and the domain port.

    use super::*;
    use rstest::rstest;

    #[rstest]
    fn checkout_failures_surface_as_connection_errors() {
        let mapped = AnimalPersistenceError::from(PoolError::checkout("timed out"));
        assert_eq!(mapped, AnimalPersistenceError::connection("timed out"));
    }

    #[rstest]
    fn probe_failures_surface_as_query_errors() {
        let mapped = AnimalPersistenceError::from(PoolError::probe("permission denied"));
        assert_eq!(mapped, AnimalPersistenceError::query("permission denied"));
    }
}
