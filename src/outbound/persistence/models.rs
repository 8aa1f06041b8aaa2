//! Diesel row and write structs for the `animals` table.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::animals;
use crate::domain::Animal;

/// Row read from the `animals` table.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = animals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AnimalRecord {
    pub id: Uuid,
    pub name: String,
    pub species: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AnimalRecord> for Animal {
    fn from(record: AnimalRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            species: record.species,
            age: record.age,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Insert struct for new animal rows; timestamps come from column defaults.
#[derive(Debug, Insertable)]
#[diesel(table_name = animals)]
pub struct NewAnimalRecord<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub species: &'a str,
    pub age: i32,
}

/// Changeset replacing an animal's content on update.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = animals)]
pub struct AnimalChangeset<'a> {
    pub name: &'a str,
    pub species: &'a str,
    pub age: i32,
    pub updated_at: DateTime<Utc>,
}
